//! Log notification sink
//!
//! Writes every message through `tracing` at a configurable level. Needs no
//! services from the container.

use super::{
    NOTIFICATION_SINKS, contract_mismatch, NotificationDefinition, NotificationKind, NotificationMessage,
    NotificationSettings, NotificationSink,
};
use async_trait::async_trait;
use linkme::distributed_slice;
use plugrack_application::{ProviderImplementation, ServiceContainer};
use plugrack_domain::entities::ProviderDefinition;
use plugrack_domain::error::Result;
use plugrack_domain::ports::Provider;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace, warn};
use validator::{Validate, ValidationError};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn validate_level(level: &str) -> std::result::Result<(), ValidationError> {
    if LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_level"))
    }
}

/// Settings of [`LogNotification`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LogNotificationSettings {
    /// Level messages are logged at
    #[validate(custom(
        function = "validate_level",
        message = "Level must be one of trace, debug, info, warn, error"
    ))]
    pub level: String,
}

impl LogNotificationSettings {
    /// Contract name of this schema
    pub const CONTRACT: &'static str = "LogNotificationSettings";
}

impl Default for LogNotificationSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Sink writing to the application log
pub struct LogNotification {
    definition: NotificationDefinition,
    settings: LogNotificationSettings,
}

impl LogNotification {
    /// Implementation name
    pub const NAME: &'static str = "LogNotification";

    /// Create a sink for a definition
    ///
    /// Fails with `Error::Resolution` when the definition carries settings
    /// of another implementation.
    pub fn new(definition: NotificationDefinition) -> Result<Self> {
        let settings = match &definition.settings {
            NotificationSettings::Log(settings) => settings.clone(),
            other => {
                return Err(contract_mismatch(
                    Self::NAME,
                    other,
                    LogNotificationSettings::CONTRACT,
                ));
            }
        };
        Ok(Self {
            definition,
            settings,
        })
    }
}

impl Provider<NotificationSettings> for LogNotification {
    fn definition(&self) -> &ProviderDefinition<NotificationSettings> {
        &self.definition
    }
}

#[async_trait]
impl NotificationSink for LogNotification {
    async fn notify(&self, message: &NotificationMessage) -> Result<()> {
        let sink = self.name();
        let title = message.title.as_str();
        let body = message.body.as_str();

        match self.settings.level.to_ascii_lowercase().as_str() {
            "trace" => trace!(sink, title, "{}", body),
            "debug" => debug!(sink, title, "{}", body),
            "warn" => warn!(sink, title, "{}", body),
            "error" => error!(sink, title, "{}", body),
            _ => info!(sink, title, "{}", body),
        }
        Ok(())
    }
}

fn default_settings() -> NotificationSettings {
    NotificationSettings::Log(LogNotificationSettings::default())
}

fn log_factory(
    _container: &ServiceContainer,
    definition: NotificationDefinition,
) -> Result<Box<dyn NotificationSink>> {
    Ok(Box::new(LogNotification::new(definition)?))
}

#[distributed_slice(NOTIFICATION_SINKS)]
static LOG_NOTIFICATION: ProviderImplementation<NotificationKind> = ProviderImplementation {
    name: LogNotification::NAME,
    description: "Writes notifications to the application log",
    config_contract: LogNotificationSettings::CONTRACT,
    default_settings,
    factory: log_factory,
};
