//! plugrack - Entry Point

// Force-link plugrack-providers so its linkme registrations are included
extern crate plugrack_providers;

use anyhow::Context;
use clap::Parser;
use plugrack::cli::{Cli, execute};
use plugrack_infrastructure::{ConfigLoader, init_app, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let context = init_app(config).await.context("Failed to start")?;
    let output = execute(&context, cli.command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
