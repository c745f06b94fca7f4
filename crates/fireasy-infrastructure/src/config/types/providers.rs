//! `fireasy:providers` section
//!
//! Extra registry keys for provider types:
//!
//! ```toml
//! [fireasy.providers]
//! Sql = "Odbc"
//!
//! [fireasy.providers.Documents]
//! type = "fireasy_providers::database::MongoDbProvider"
//! ```

use std::collections::BTreeMap;

use fireasy_application::{ProviderRegistry, ResolvedType};
use fireasy_domain::error::Result;
use tracing::{debug, warn};

use crate::config::binder::{BindingContext, SettingsSection};
use crate::constants::SECTION_PROVIDERS;

/// One provider alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSetting {
    /// Registry key to add
    pub alias: String,
    /// Target as written: a registered provider name or a type name
    pub type_name: String,
    /// Resolved target type, when the name is a known type
    pub provider_type: Option<ResolvedType>,
}

impl ProviderSetting {
    fn bind(entry: &BindingContext<'_>) -> Option<Self> {
        let type_name = entry.as_string().or_else(|| entry.get_string("type"))?;
        Some(Self {
            alias: entry.key().to_string(),
            provider_type: entry.resolver().resolve(&type_name),
            type_name,
        })
    }

    /// Add the alias to `registry`
    ///
    /// A registered provider name is aliased so both keys share one
    /// instance; otherwise the resolved provider type is registered. Returns
    /// whether the alias was added.
    pub fn apply(&self, registry: &mut ProviderRegistry) -> bool {
        if registry.contains(&self.type_name) {
            return registry.add_alias(&self.alias, &self.type_name).is_ok();
        }
        match self
            .provider_type
            .as_ref()
            .and_then(|resolved| resolved.provider_factory().map(|f| (resolved, f)))
        {
            Some((resolved, factory)) => {
                debug!(
                    alias = %self.alias,
                    provider_type = %resolved.name,
                    "Provider alias registered from type"
                );
                registry.add_provider_described(&self.alias, resolved.description.clone(), factory);
                true
            }
            None => {
                warn!(
                    alias = %self.alias,
                    target = %self.type_name,
                    "Provider alias target is neither a registered provider nor a provider type"
                );
                false
            }
        }
    }
}

/// Provider aliases by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidersSetting {
    /// Aliases by name
    pub providers: BTreeMap<String, ProviderSetting>,
}

impl ProvidersSetting {
    /// Apply every alias; returns how many were added
    pub fn apply(&self, registry: &mut ProviderRegistry) -> usize {
        let mut added = 0;
        for setting in self.providers.values() {
            if setting.apply(registry) {
                added += 1;
            }
        }
        added
    }

    /// Number of aliases
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether there are no aliases
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl SettingsSection for ProvidersSetting {
    const PATH: &'static str = SECTION_PROVIDERS;

    fn bind(section: &BindingContext<'_>) -> Result<Self> {
        let providers = section
            .children()
            .iter()
            .filter_map(ProviderSetting::bind)
            .map(|setting| (setting.alias.clone(), setting))
            .collect();
        Ok(Self { providers })
    }
}
