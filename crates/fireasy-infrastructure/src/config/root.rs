//! Section lookup over the loaded `[fireasy]` table

use figment::value::{Dict, Tag, Value};
use fireasy_application::TypeResolver;
use fireasy_domain::error::Result;
use tracing::debug;

use super::binder::{BindingContext, SectionBinder, SectionPath, SettingsSection, lookup};
use super::types::AppConfig;
use crate::constants::ROOT_SECTION;

/// The `fireasy` configuration tree plus the resolver used while binding
#[derive(Debug, Clone)]
pub struct ConfigRoot {
    value: Value,
    resolver: TypeResolver,
}

impl ConfigRoot {
    /// Wrap a `fireasy` table
    pub fn new(value: Value, resolver: TypeResolver) -> Self {
        Self { value, resolver }
    }

    /// Wrap the `fireasy` table of a loaded configuration
    pub fn from_config(config: &AppConfig, resolver: TypeResolver) -> Self {
        Self::new(config.fireasy.clone(), resolver)
    }

    /// A root with no sections
    pub fn empty(resolver: TypeResolver) -> Self {
        Self::new(Value::Dict(Tag::Default, Dict::new()), resolver)
    }

    /// Resolver handed to binding contexts
    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Node at a colon path such as `fireasy:dataInstances`
    ///
    /// The first segment must name the root table.
    pub fn node(&self, path: &str) -> Option<BindingContext<'_>> {
        let path = SectionPath::parse(path);
        let (root, rest) = path.segments().split_first()?;
        if !root.eq_ignore_ascii_case(ROOT_SECTION) {
            return None;
        }
        let mut value = &self.value;
        for segment in rest {
            value = lookup(value.as_dict()?, segment)?;
        }
        Some(BindingContext::new(path, value, &self.resolver))
    }

    /// Bind the node at `path` with `initializer`
    ///
    /// Absent sections give `Ok(None)`.
    pub fn bind<T, F>(&self, path: &str, initializer: F) -> Result<Option<T>>
    where
        F: FnOnce(&BindingContext<'_>) -> Result<T>,
    {
        match self.node(path) {
            Some(section) => SectionBinder::bind(&section, initializer).map(Some),
            None => {
                debug!(section = path, "Configuration section not present");
                Ok(None)
            }
        }
    }

    /// Bind a settings section
    ///
    /// Absent sections give `Ok(None)`.
    pub fn section<S: SettingsSection>(&self) -> Result<Option<S>> {
        self.bind(S::PATH, S::bind)
    }
}
