//! Application bootstrap
//!
//! ```text
//! AppConfig ─▶ ConfigRoot ─▶ settings (instances, imports, providers, locking)
//!                                   │
//!                                   ▼
//!   ServiceCollection ◀── options: ProviderRegistry (linked providers), LockOptions
//!          │ DeployerDiscovery::deploy (linked deployers, ordered)
//!          │ configured provider aliases
//!          ▼ build()
//!   ServiceProvider ─▶ AppContext
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config)?;
//!
//! let provider = context.provider_for("main")?;
//! let locker = context.locker()?;
//! ```

use std::sync::Arc;

use fireasy_application::{
    DeployerDiscovery, DeploymentReport, DistributedLocker, ObjectMapper, ProviderRegistry,
    ServiceCollection, ServiceProvider, TypeResolver,
};
use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::providers::DatabaseProvider;
use fireasy_domain::value_objects::DataInstanceSetting;
use tracing::{debug, info};

use crate::config::{
    AppConfig, ConfigRoot, DataInstancesSetting, ImportsSetting, LockSetting, ProvidersSetting,
};

/// Booted application
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    services: ServiceProvider,
    registry: Arc<ProviderRegistry>,
    resolver: TypeResolver,
    instances: DataInstancesSetting,
    imports: ImportsSetting,
    deployment: DeploymentReport,
}

impl AppContext {
    /// Built service container
    pub fn services(&self) -> &ServiceProvider {
        &self.services
    }

    /// Final provider registry (linked providers, deployer and configured additions)
    pub fn provider_registry(&self) -> Arc<ProviderRegistry> {
        Arc::clone(&self.registry)
    }

    /// Type resolver seeded from linked descriptors
    pub fn type_resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Bound `fireasy:dataInstances`
    pub fn data_instances(&self) -> &DataInstancesSetting {
        &self.instances
    }

    /// Bound `fireasy:imports`
    pub fn imports(&self) -> &ImportsSetting {
        &self.imports
    }

    /// Deployers in the order they ran
    pub fn deployment(&self) -> &DeploymentReport {
        &self.deployment
    }

    /// Locker registered by the locking deployer
    pub fn locker(&self) -> Result<Arc<DistributedLocker>> {
        self.services.get::<DistributedLocker>()
    }

    /// Object mapper registered by the mapping deployer
    pub fn mapper(&self) -> Result<Arc<ObjectMapper>> {
        self.services.get::<ObjectMapper>()
    }

    /// Provider for a data instance setting
    pub fn defined_provider(
        &self,
        setting: &DataInstanceSetting,
    ) -> Result<Arc<dyn DatabaseProvider>> {
        self.registry.get_defined_provider(setting)
    }

    /// Provider for a configured data instance
    pub fn provider_for(&self, instance: &str) -> Result<Arc<dyn DatabaseProvider>> {
        let setting = self
            .instances
            .get(instance)
            .ok_or_else(|| Error::not_found(format!("data instance '{instance}'")))?;
        self.defined_provider(setting)
    }

    /// Provider for the default data instance
    pub fn default_provider(&self) -> Result<Arc<dyn DatabaseProvider>> {
        let setting = self
            .instances
            .default_instance()
            .ok_or_else(|| Error::not_found("default data instance"))?;
        self.defined_provider(setting)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("providers", &self.registry.len())
            .field("instances", &self.instances.len())
            .field("imports", &self.imports.len())
            .field("deployed", &self.deployment.deployed)
            .finish_non_exhaustive()
    }
}

/// Boot with every linked deployer
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    init_app_with(config, &DeployerDiscovery::from_registry())
}

/// Boot with an explicit set of deployers
pub fn init_app_with(config: AppConfig, discovery: &DeployerDiscovery) -> Result<AppContext> {
    let resolver = TypeResolver::with_registered();
    let root = ConfigRoot::from_config(&config, resolver.clone());

    let instances = root.section::<DataInstancesSetting>()?.unwrap_or_default();
    instances.validate()?;
    let imports = root.section::<ImportsSetting>()?.unwrap_or_default();
    let providers = root.section::<ProvidersSetting>()?.unwrap_or_default();
    let locking = root.section::<LockSetting>()?.unwrap_or_default();
    locking.validate()?;
    debug!(
        instances = instances.len(),
        imports = imports.len(),
        provider_aliases = providers.len(),
        lock_timeout_secs = locking.timeout_secs,
        "Configuration sections bound"
    );

    let mut services = ServiceCollection::new();
    services
        .add_options(ProviderRegistry::with_registered())
        .add_options(locking.to_options())
        .add_singleton(resolver.clone())
        .add_singleton(instances.clone())
        .add_singleton(imports.clone());

    let deployment = discovery.deploy(&mut services)?;

    // Configured aliases apply last so they see deployer registrations
    services.configure::<ProviderRegistry, _>(|registry| {
        let added = providers.apply(registry);
        debug!(added, "Configured provider aliases applied");
    });

    let registry = Arc::new(
        services
            .options::<ProviderRegistry>()
            .cloned()
            .unwrap_or_default(),
    );
    let services = services.build();

    info!(
        providers = registry.len(),
        deployers = deployment.deployed.len(),
        "Application initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        services,
        registry,
        resolver,
        instances,
        imports,
        deployment,
    })
}
