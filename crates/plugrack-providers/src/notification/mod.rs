//! Notification Sink Provider Kind
//!
//! Sinks receive short human-readable messages about events in the host.
//! Unlike metadata consumers, a sink is active as soon as its settings
//! validate; `enable` is ignored.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use linkme::distributed_slice;
use plugrack_application::ProviderImplementation;
use plugrack_domain::entities::DefinitionOf;
use plugrack_domain::error::{Error, Result};
use plugrack_domain::ports::{Provider, ProviderKind, ProviderSettings};
use plugrack_domain::value_objects::ValidationResult;
use serde::{Deserialize, Serialize};

/// Tracing-backed sink
pub mod log;
/// HTTP webhook sink
pub mod webhook;

pub use log::{LogNotification, LogNotificationSettings};
pub use webhook::{WebhookMethod, WebhookNotification, WebhookNotificationSettings};

/// Registry of notification sink implementations
#[distributed_slice]
pub static NOTIFICATION_SINKS: [ProviderImplementation<NotificationKind>] = [..];

/// The notification sink provider kind
#[derive(Debug, Clone, Copy)]
pub struct NotificationKind;

impl ProviderKind for NotificationKind {
    const NAME: &'static str = "notification";

    type Settings = NotificationSettings;
    type Provider = dyn NotificationSink;
}

/// Settings of every notification sink, tagged by contract name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contract")]
pub enum NotificationSettings {
    /// Settings of [`LogNotification`]
    #[serde(rename = "LogNotificationSettings")]
    Log(LogNotificationSettings),
    /// Settings of [`WebhookNotification`]
    #[serde(rename = "WebhookNotificationSettings")]
    Webhook(WebhookNotificationSettings),
}

impl ProviderSettings for NotificationSettings {
    fn validate(&self) -> ValidationResult {
        match self {
            Self::Log(settings) => ValidationResult::of(settings),
            Self::Webhook(settings) => ValidationResult::of(settings),
        }
    }

    fn contract(&self) -> &'static str {
        match self {
            Self::Log(_) => LogNotificationSettings::CONTRACT,
            Self::Webhook(_) => WebhookNotificationSettings::CONTRACT,
        }
    }
}

/// A message delivered to every available sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Short headline
    pub title: String,
    /// Message body
    pub body: String,
    /// When the notified event happened
    pub occurred_at: DateTime<Utc>,
}

impl NotificationMessage {
    /// Create a message stamped with the current time
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Capability exposed by live notification sinks
#[async_trait]
pub trait NotificationSink: Provider<NotificationSettings> {
    /// Deliver a message
    async fn notify(&self, message: &NotificationMessage) -> Result<()>;
}

/// Shorthand for the definition type of this kind
pub type NotificationDefinition = DefinitionOf<NotificationKind>;

/// Error for a definition carrying another implementation's settings
fn contract_mismatch(implementation: &str, settings: &NotificationSettings, expected: &str) -> Error {
    Error::resolution(
        implementation,
        format!(
            "settings contract '{}' does not match '{expected}'",
            settings.contract()
        ),
    )
}
