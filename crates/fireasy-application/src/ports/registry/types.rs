//! Type Descriptor Registry
//!
//! Rust has no runtime lookup of types by name, so every type that
//! configuration may refer to by name registers a descriptor here.
//! [`crate::domain_services::TypeResolver`] resolves free-form names
//! against this slice.

use std::sync::Arc;

use fireasy_domain::ports::providers::DatabaseProvider;

/// Registry entry describing a nameable type
pub struct TypeDescriptorEntry {
    /// Fully qualified name (e.g., "fireasy_providers::database::OdbcProvider")
    pub name: &'static str,
    /// Short names accepted in configuration
    pub aliases: &'static [&'static str],
    /// Human-readable description
    pub description: &'static str,
    /// Constructor when the type is a database provider
    pub provider_factory: Option<fn() -> Arc<dyn DatabaseProvider>>,
}

#[linkme::distributed_slice]
pub static TYPE_DESCRIPTORS: [TypeDescriptorEntry] = [..];

/// List all registered type descriptors as (name, description)
pub fn list_type_descriptors() -> Vec<(&'static str, &'static str)> {
    let mut types: Vec<_> = TYPE_DESCRIPTORS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    types.sort_unstable();
    types
}
