//! Webhook notification sink
//!
//! Sends each message as a JSON document to a user-configured URL using the
//! shared `reqwest::Client` from the service container.

use super::{
    NOTIFICATION_SINKS, contract_mismatch, NotificationDefinition, NotificationKind, NotificationMessage,
    NotificationSettings, NotificationSink,
};
use async_trait::async_trait;
use linkme::distributed_slice;
use plugrack_application::{ProviderImplementation, ServiceContainer};
use plugrack_domain::entities::ProviderDefinition;
use plugrack_domain::error::{Error, Result};
use plugrack_domain::ports::Provider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

/// HTTP method used for deliveries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    /// `POST`
    #[default]
    Post,
    /// `PUT`
    Put,
}

impl From<WebhookMethod> for reqwest::Method {
    fn from(method: WebhookMethod) -> Self {
        match method {
            WebhookMethod::Post => reqwest::Method::POST,
            WebhookMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// Settings of [`WebhookNotification`]
///
/// The default has no URL, so a fresh template is never active until the
/// user fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WebhookNotificationSettings {
    /// Target URL
    #[validate(url(message = "Must be a valid URL"))]
    pub url: String,
    /// HTTP method
    #[serde(default)]
    pub method: WebhookMethod,
}

impl WebhookNotificationSettings {
    /// Contract name of this schema
    pub const CONTRACT: &'static str = "WebhookNotificationSettings";
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    provider: &'a str,
    #[serde(flatten)]
    message: &'a NotificationMessage,
}

/// Sink posting JSON to a URL
pub struct WebhookNotification {
    definition: NotificationDefinition,
    settings: WebhookNotificationSettings,
    client: Arc<reqwest::Client>,
}

impl WebhookNotification {
    /// Implementation name
    pub const NAME: &'static str = "WebhookNotification";

    /// Create a sink for a definition
    ///
    /// Fails with `Error::Resolution` when the definition carries settings
    /// of another implementation.
    pub fn new(definition: NotificationDefinition, client: Arc<reqwest::Client>) -> Result<Self> {
        let settings = match &definition.settings {
            NotificationSettings::Webhook(settings) => settings.clone(),
            other => {
                return Err(contract_mismatch(
                    Self::NAME,
                    other,
                    WebhookNotificationSettings::CONTRACT,
                ));
            }
        };
        Ok(Self {
            definition,
            settings,
            client,
        })
    }
}

impl Provider<NotificationSettings> for WebhookNotification {
    fn definition(&self) -> &ProviderDefinition<NotificationSettings> {
        &self.definition
    }
}

#[async_trait]
impl NotificationSink for WebhookNotification {
    async fn notify(&self, message: &NotificationMessage) -> Result<()> {
        let settings = &self.settings;
        let payload = WebhookPayload {
            provider: self.name(),
            message,
        };

        debug!(sink = self.name(), url = %settings.url, "Delivering webhook notification");

        self.client
            .request(settings.method.into(), &settings.url)
            .json(&payload)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                Error::network_with_source(format!("Webhook delivery to {} failed", settings.url), e)
            })?;
        Ok(())
    }
}

fn default_settings() -> NotificationSettings {
    NotificationSettings::Webhook(WebhookNotificationSettings::default())
}

fn webhook_factory(
    container: &ServiceContainer,
    definition: NotificationDefinition,
) -> Result<Box<dyn NotificationSink>> {
    let client = container.get::<reqwest::Client>()?;
    Ok(Box::new(WebhookNotification::new(definition, client)?))
}

#[distributed_slice(NOTIFICATION_SINKS)]
static WEBHOOK_NOTIFICATION: ProviderImplementation<NotificationKind> = ProviderImplementation {
    name: WebhookNotification::NAME,
    description: "Posts notifications as JSON to a URL",
    config_contract: WebhookNotificationSettings::CONTRACT,
    default_settings,
    factory: webhook_factory,
};
