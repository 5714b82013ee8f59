//! Command line interface
//!
//! Every command boots the application (which runs startup reconciliation)
//! and prints its result as JSON.

use clap::{Parser, Subcommand, ValueEnum};
use plugrack_application::ProviderRegistry;
use plugrack_domain::error::Result;
use plugrack_domain::ports::{Provider, ProviderKind};
use plugrack_infrastructure::AppContext;
use serde_json::Value;
use std::path::PathBuf;

/// Command line interface for plugrack
#[derive(Parser, Debug)]
#[command(name = "plugrack")]
#[command(about = "Inspect and reconcile pluggable provider definitions")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Unsaved template definitions, one per implementation
    Templates {
        /// Provider kind
        kind: KindArg,
    },
    /// Every stored definition
    List {
        /// Provider kind
        kind: KindArg,
    },
    /// Definitions that resolved into live instances
    Available {
        /// Provider kind
        kind: KindArg,
    },
    /// Startup reconciliation report
    Reconcile {
        /// Provider kind
        kind: KindArg,
    },
}

/// Provider kinds selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    /// Metadata consumers
    Metadata,
    /// Notification sinks
    Notification,
}

impl KindArg {
    fn name(self) -> &'static str {
        match self {
            Self::Metadata => plugrack_providers::MetadataKind::NAME,
            Self::Notification => plugrack_providers::NotificationKind::NAME,
        }
    }
}

impl Command {
    fn kind(self) -> KindArg {
        match self {
            Self::Templates { kind }
            | Self::List { kind }
            | Self::Available { kind }
            | Self::Reconcile { kind } => kind,
        }
    }
}

/// Run a command against an initialized application
pub async fn execute(context: &AppContext, command: Command) -> Result<Value> {
    match command.kind() {
        KindArg::Metadata => run_for(context, &context.metadata(), command).await,
        KindArg::Notification => run_for(context, &context.notification(), command).await,
    }
}

async fn run_for<K: ProviderKind>(
    context: &AppContext,
    registry: &ProviderRegistry<K>,
    command: Command,
) -> Result<Value> {
    let value = match command {
        Command::Templates { .. } => serde_json::to_value(registry.templates())?,
        Command::List { .. } => serde_json::to_value(registry.all().await?)?,
        Command::Available { .. } => {
            let definitions: Vec<_> = registry
                .available_providers()
                .await?
                .iter()
                .map(|provider| provider.definition().clone())
                .collect();
            serde_json::to_value(definitions)?
        }
        Command::Reconcile { kind } => {
            let report = context
                .startup_reports()
                .iter()
                .find(|report| report.kind == kind.name());
            serde_json::to_value(report)?
        }
    };
    Ok(value)
}
