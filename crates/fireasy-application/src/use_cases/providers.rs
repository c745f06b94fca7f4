//! Provider registration from deployers
//!
//! The provider registry is an options object of the service collection,
//! so deployers extend it in place and the built container holds the
//! final registry.

use std::sync::Arc;

use fireasy_domain::ports::providers::DatabaseProvider;

use crate::domain_services::ProviderRegistry;
use crate::services::ServiceCollection;

/// Provider registration helpers on [`ServiceCollection`]
pub trait ProviderServicesExt {
    /// Register a provider factory in the shared registry
    fn add_database_provider<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn DatabaseProvider> + Send + Sync + 'static;

    /// Register an alias for an already registered provider
    ///
    /// Unknown targets are logged and skipped.
    fn add_database_provider_alias(&mut self, alias: &str, target: &str) -> &mut Self;
}

impl ProviderServicesExt for ServiceCollection {
    fn add_database_provider<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn DatabaseProvider> + Send + Sync + 'static,
    {
        self.configure::<ProviderRegistry, _>(|registry| {
            registry.add_provider(name, factory);
        })
    }

    fn add_database_provider_alias(&mut self, alias: &str, target: &str) -> &mut Self {
        self.configure::<ProviderRegistry, _>(|registry| {
            if let Err(e) = registry.add_alias(alias, target) {
                tracing::warn!(alias, target, error = %e, "Provider alias skipped");
            }
        })
    }
}
