//! Free-form type name resolution
//!
//! Configuration refers to types by name (`contractType`, `importType`,
//! provider `type`). The resolver maps those names onto registered
//! descriptors. An unknown name resolves to `None`; callers decide
//! whether that is fatal.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use fireasy_domain::ports::providers::DatabaseProvider;
use serde::Serialize;
use tracing::warn;

use crate::ports::registry::TYPE_DESCRIPTORS;

/// A resolved type
#[derive(Clone, Serialize)]
pub struct ResolvedType {
    /// Fully qualified name
    pub name: String,
    /// Human-readable description
    pub description: String,
    #[serde(skip)]
    provider_factory: Option<fn() -> Arc<dyn DatabaseProvider>>,
}

impl ResolvedType {
    /// Describe a type that is not a provider
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            provider_factory: None,
        }
    }

    /// Describe a provider type
    pub fn provider(
        name: impl Into<String>,
        description: impl Into<String>,
        factory: fn() -> Arc<dyn DatabaseProvider>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            provider_factory: Some(factory),
        }
    }

    /// Constructor when the type is a database provider
    pub fn provider_factory(&self) -> Option<fn() -> Arc<dyn DatabaseProvider>> {
        self.provider_factory
    }

    /// Whether the type is a database provider
    pub fn is_provider(&self) -> bool {
        self.provider_factory.is_some()
    }
}

impl PartialEq for ResolvedType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ResolvedType {}

impl fmt::Debug for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedType")
            .field("name", &self.name)
            .field("is_provider", &self.is_provider())
            .finish()
    }
}

/// Resolves type names against registered descriptors
///
/// Full names match exactly; aliases match case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    by_name: HashMap<String, ResolvedType>,
    by_alias: HashMap<String, String>,
}

impl TypeResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver seeded from the link-time `TYPE_DESCRIPTORS` slice
    pub fn with_registered() -> Self {
        let mut resolver = Self::new();
        for entry in TYPE_DESCRIPTORS {
            let resolved = match entry.provider_factory {
                Some(factory) => ResolvedType::provider(entry.name, entry.description, factory),
                None => ResolvedType::new(entry.name, entry.description),
            };
            resolver.register(resolved, entry.aliases);
        }
        resolver
    }

    /// Register a type under its full name and the given aliases
    pub fn register(&mut self, resolved: ResolvedType, aliases: &[&str]) -> &mut Self {
        for alias in aliases {
            self.by_alias
                .insert(alias.to_lowercase(), resolved.name.clone());
        }
        self.by_name.insert(resolved.name.clone(), resolved);
        self
    }

    /// Resolve a type name
    ///
    /// Returns `None` for blank or unknown names.
    pub fn resolve(&self, name: &str) -> Option<ResolvedType> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(found) = self.by_name.get(name) {
            return Some(found.clone());
        }
        let resolved = self
            .by_alias
            .get(&name.to_lowercase())
            .and_then(|full| self.by_name.get(full))
            .cloned();
        if resolved.is_none() {
            warn!(type_name = name, "Type name could not be resolved");
        }
        resolved
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether no types are registered
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
