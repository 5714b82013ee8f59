//! Composition root
//!
//! Wires configuration into concrete stores, the event bus, the shared
//! service container and one registry per provider kind, then delivers the
//! application-started signal.
//!
//! ```text
//! AppConfig ──► stores ─────────────┐
//!           ──► event bus ──────────┤
//!           ──► ServiceContainer ──► ContainerResolver ──► ProviderRegistry<K>
//! linkme slices ──► ImplementationCatalog<K> ──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! for sink in context.notification().available_providers().await? {
//!     sink.notify(&message).await?;
//! }
//! ```

use crate::config::{AppConfig, EventBusKind, HttpConfig, StoreBackend, StoreConfig};
use crate::constants::store_file_name;
use plugrack_application::{
    ContainerResolver, ImplementationCatalog, ProviderRegistry, ProviderStartup,
    ReconciliationReport, SeedMissingDefinitions, ServiceContainer,
};
use plugrack_domain::error::{Error, Result};
use plugrack_domain::ports::{DiskProvider, EventBusProvider, ProviderKind};
use plugrack_domain::repositories::ProviderRepository;
use plugrack_providers::metadata::{METADATA_CONSUMERS, MetadataKind};
use plugrack_providers::notification::{NOTIFICATION_SINKS, NotificationKind};
use plugrack_providers::{
    InMemoryProviderRepository, JsonFileProviderRepository, LocalDiskProvider,
    NullEventBusProvider, TokioEventBusProvider,
};
use std::sync::Arc;
use tracing::info;

/// Application context: everything a host needs after startup
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    container: Arc<ServiceContainer>,
    event_bus: Arc<dyn EventBusProvider>,
    metadata: Arc<ProviderRegistry<MetadataKind>>,
    notification: Arc<ProviderRegistry<NotificationKind>>,
    startup_reports: Vec<ReconciliationReport>,
}

impl AppContext {
    /// Shared services handed to provider factories
    pub fn container(&self) -> Arc<ServiceContainer> {
        Arc::clone(&self.container)
    }

    /// Event bus receiving definition changes
    pub fn event_bus(&self) -> Arc<dyn EventBusProvider> {
        Arc::clone(&self.event_bus)
    }

    /// Metadata consumer registry
    pub fn metadata(&self) -> Arc<ProviderRegistry<MetadataKind>> {
        Arc::clone(&self.metadata)
    }

    /// Notification sink registry
    pub fn notification(&self) -> Arc<ProviderRegistry<NotificationKind>> {
        Arc::clone(&self.notification)
    }

    /// What startup reconciliation did, one report per kind
    pub fn startup_reports(&self) -> &[ReconciliationReport] {
        &self.startup_reports
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("container", &self.container)
            .field("metadata", &self.metadata)
            .field("notification", &self.notification)
            .finish_non_exhaustive()
    }
}

/// Build the application and run startup reconciliation for every kind
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing plugrack");

    let event_bus = create_event_bus(&config)?;
    let container = Arc::new(create_container(&config.http)?);
    let resolver = Arc::new(ContainerResolver::new(Arc::clone(&container)));

    let mut metadata = ProviderRegistry::<MetadataKind>::new(
        create_repository::<MetadataKind>(&config.store).await?,
        Arc::new(ImplementationCatalog::from_slice(&METADATA_CONSUMERS)?),
        resolver.clone(),
        Arc::clone(&event_bus),
    );
    if config.providers.seed_metadata_defaults {
        metadata = metadata.with_initializer(Arc::new(SeedMissingDefinitions));
    }
    let metadata = Arc::new(metadata);

    let notification = Arc::new(ProviderRegistry::<NotificationKind>::new(
        create_repository::<NotificationKind>(&config.store).await?,
        Arc::new(ImplementationCatalog::from_slice(&NOTIFICATION_SINKS)?),
        resolver,
        Arc::clone(&event_bus),
    ));

    let startup = ProviderStartup::new()
        .with_handler(metadata.clone())
        .with_handler(notification.clone());
    let startup_reports = startup.initialize_all().await?;

    info!("plugrack initialized");
    Ok(AppContext {
        config: Arc::new(config),
        container,
        event_bus,
        metadata,
        notification,
        startup_reports,
    })
}

fn create_event_bus(config: &AppConfig) -> Result<Arc<dyn EventBusProvider>> {
    let event_bus: Arc<dyn EventBusProvider> = match config.event_bus.provider {
        EventBusKind::Tokio => Arc::new(TokioEventBusProvider::try_with_capacity(
            config.event_bus.capacity,
        )?),
        EventBusKind::Null => Arc::new(NullEventBusProvider::new()),
    };
    Ok(event_bus)
}

fn create_container(http: &HttpConfig) -> Result<ServiceContainer> {
    let client = reqwest::Client::builder()
        .timeout(http.timeout())
        .user_agent(http.user_agent.clone())
        .build()
        .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;

    Ok(ServiceContainer::builder()
        .register::<dyn DiskProvider>(Arc::new(LocalDiskProvider::new()))
        .register(Arc::new(client))
        .build())
}

async fn create_repository<K: ProviderKind>(
    config: &StoreConfig,
) -> Result<Arc<dyn ProviderRepository<K::Settings>>> {
    let repository: Arc<dyn ProviderRepository<K::Settings>> = match config.backend {
        StoreBackend::Memory => Arc::new(InMemoryProviderRepository::<K::Settings>::new()),
        StoreBackend::JsonFile => {
            let path = config.data_dir.join(store_file_name(K::NAME));
            Arc::new(JsonFileProviderRepository::<K::Settings>::open(path).await?)
        }
    };
    Ok(repository)
}
