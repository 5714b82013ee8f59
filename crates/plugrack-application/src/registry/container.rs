//! Service Container
//!
//! Type map of shared services handed to provider factories. Built once at
//! startup by the composition root, read-only afterwards.

use plugrack_domain::error::{Error, Result};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

type ServiceMap = HashMap<TypeId, (&'static str, Box<dyn Any + Send + Sync>)>;

/// Builder for [`ServiceContainer`]
#[derive(Default)]
pub struct ServiceContainerBuilder {
    services: ServiceMap,
}

impl ServiceContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shared service, replacing any previous one of the same type
    ///
    /// Trait objects are registered as `Arc<dyn Trait>` and looked up with
    /// `get::<dyn Trait>()`.
    pub fn register<T>(mut self, service: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services
            .insert(TypeId::of::<Arc<T>>(), (type_name::<T>(), Box::new(service)));
        self
    }

    /// Freeze the container
    pub fn build(self) -> ServiceContainer {
        ServiceContainer {
            services: self.services,
        }
    }
}

/// Immutable collection of shared services
#[derive(Default)]
pub struct ServiceContainer {
    services: ServiceMap,
}

impl ServiceContainer {
    /// Start building a container
    pub fn builder() -> ServiceContainerBuilder {
        ServiceContainerBuilder::new()
    }

    /// Fetch a registered service
    ///
    /// Fails with `Error::NotFound` when no service of that type was registered.
    pub fn get<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services
            .get(&TypeId::of::<Arc<T>>())
            .and_then(|(_, service)| service.downcast_ref::<Arc<T>>())
            .cloned()
            .ok_or_else(|| Error::not_found(format!("service {}", type_name::<T>())))
    }

    /// Check if a service type is registered
    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services.contains_key(&TypeId::of::<Arc<T>>())
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// True when no service is registered
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.services.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        f.debug_struct("ServiceContainer")
            .field("services", &names)
            .finish()
    }
}
