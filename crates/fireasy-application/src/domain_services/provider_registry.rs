//! Provider registry
//!
//! Maps case-insensitive provider names to factories. The registry is
//! populated at startup (link-time entries, deployers, configured aliases)
//! and only read afterwards, so lookups take no locks beyond the one-time
//! memoization of each instance.
//!
//! ```text
//! add_provider("Odbc", factory)          get_defined_provider(setting)
//!            │                                     │
//!            ▼                                     ▼
//!   slots["odbc"] ──first lookup──▶ factory() ──▶ base instance
//!                                                   │ FeaturedProvider?
//!                                                   ▼
//!                               detect_feature(connection_string)
//!                                                   │ Some(feature)
//!                                                   ▼
//!                                       with_feature(feature) (memoized)
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::providers::DatabaseProvider;
use fireasy_domain::value_objects::DataInstanceSetting;
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::ports::registry::DATABASE_PROVIDERS;

/// Factory producing a base provider instance
pub type ProviderFactory = Arc<dyn Fn() -> Arc<dyn DatabaseProvider> + Send + Sync>;

struct ProviderSlot {
    name: String,
    description: String,
    factory: ProviderFactory,
    instance: OnceCell<Arc<dyn DatabaseProvider>>,
    featured: DashMap<String, Arc<dyn DatabaseProvider>>,
}

impl ProviderSlot {
    fn new(name: String, description: String, factory: ProviderFactory) -> Self {
        Self {
            name,
            description,
            factory,
            instance: OnceCell::new(),
            featured: DashMap::new(),
        }
    }

    fn instance(&self) -> Arc<dyn DatabaseProvider> {
        self.instance.get_or_init(|| (self.factory)()).clone()
    }
}

/// Case-insensitive registry of database providers
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    slots: BTreeMap<String, Arc<ProviderSlot>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded from the link-time `DATABASE_PROVIDERS` slice
    pub fn with_registered() -> Self {
        let mut registry = Self::new();
        for entry in DATABASE_PROVIDERS {
            let factory = entry.factory;
            registry.add_provider_described(entry.name, entry.description, move || factory());
        }
        info!(
            providers = registry.len(),
            "Seeded provider registry from link-time entries"
        );
        registry
    }

    /// Register a provider factory under `name`
    ///
    /// A later registration under the same (case-insensitive) name replaces
    /// the earlier one.
    pub fn add_provider<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn DatabaseProvider> + Send + Sync + 'static,
    {
        self.add_provider_described(name, "", factory)
    }

    /// Register a provider factory with a description
    pub fn add_provider_described<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> &mut Self
    where
        F: Fn() -> Arc<dyn DatabaseProvider> + Send + Sync + 'static,
    {
        let name = name.into();
        let slot = ProviderSlot::new(name.clone(), description.into(), Arc::new(factory));
        if self.slots.insert(key(&name), Arc::new(slot)).is_some() {
            debug!(provider = %name, "Provider registration overridden");
        } else {
            debug!(provider = %name, "Provider registered");
        }
        self
    }

    /// Register an already constructed provider instance
    pub fn add_instance(
        &mut self,
        name: impl Into<String>,
        provider: Arc<dyn DatabaseProvider>,
    ) -> &mut Self {
        self.add_provider(name, move || provider.clone())
    }

    /// Make `alias` resolve to the same provider as `target`
    ///
    /// Both names share one memoized instance.
    pub fn add_alias(&mut self, alias: impl Into<String>, target: &str) -> Result<&mut Self> {
        let alias = alias.into();
        let slot = self
            .slots
            .get(&key(target))
            .cloned()
            .ok_or_else(|| Error::provider_not_found(target, self.names()))?;
        debug!(alias = %alias, target = %slot.name, "Provider alias registered");
        self.slots.insert(key(&alias), slot);
        Ok(self)
    }

    /// Whether a provider is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(&key(name))
    }

    /// Number of registered names (aliases included)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Registered keys (lower-cased, aliases included), sorted
    pub fn names(&self) -> Vec<String> {
        self.slots.keys().cloned().collect()
    }

    /// (key, provider name, description) for every registration
    pub fn list_registered(&self) -> Vec<(String, String, String)> {
        self.slots
            .iter()
            .map(|(k, slot)| (k.clone(), slot.name.clone(), slot.description.clone()))
            .collect()
    }

    /// Look up the base provider instance
    ///
    /// Returns `None` for unknown names. The same instance is returned for
    /// every call with the same name.
    pub fn get_provider(&self, name: &str) -> Option<Arc<dyn DatabaseProvider>> {
        self.slots.get(&key(name)).map(|slot| slot.instance())
    }

    /// Resolve the provider for a data instance
    ///
    /// When the base provider is a featured provider and the connection
    /// string selects a feature, the feature-specific clone is returned;
    /// clones are memoized per feature.
    pub fn get_defined_provider(
        &self,
        setting: &DataInstanceSetting,
    ) -> Result<Arc<dyn DatabaseProvider>> {
        let slot = self
            .slots
            .get(&key(&setting.provider_name))
            .ok_or_else(|| Error::provider_not_found(&setting.provider_name, self.names()))?;
        let provider = slot.instance();

        let Some(featured) = provider.as_featured() else {
            return Ok(provider);
        };
        let Some(feature) = featured.detect_feature(&setting.connection_string) else {
            debug!(
                instance = %setting.name,
                provider = %slot.name,
                "No feature detected, using base provider"
            );
            return Ok(provider);
        };

        let variant = slot
            .featured
            .entry(feature.clone())
            .or_insert_with(|| featured.with_feature(&feature))
            .clone();
        debug!(
            instance = %setting.name,
            provider = %slot.name,
            feature = %feature,
            "Resolved featured provider"
        );
        Ok(variant)
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}
