//! Database Provider Registry
//!
//! Auto-registration slice for database providers.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime by iterating [`DATABASE_PROVIDERS`].

use std::sync::Arc;

use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::providers::DatabaseProvider;

/// Registry entry for database providers
///
/// Each provider implementation registers itself with this entry. The
/// entry contains metadata and a factory function creating the base
/// (feature-less) provider instance.
pub struct DatabaseProviderEntry {
    /// Provider name (e.g., "Odbc", "OleDb", "MongoDB"); matched case-insensitively
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the provider instance
    pub factory: fn() -> Arc<dyn DatabaseProvider>,
}

#[linkme::distributed_slice]
pub static DATABASE_PROVIDERS: [DatabaseProviderEntry] = [..];

/// Resolve a database provider by name from the link-time registry
///
/// # Returns
/// * `Ok(Arc<dyn DatabaseProvider>)` - Created provider instance
/// * `Err(Error::ProviderNotFound)` - No entry with that name
pub fn resolve_database_provider(name: &str) -> Result<Arc<dyn DatabaseProvider>> {
    DATABASE_PROVIDERS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| (entry.factory)())
        .ok_or_else(|| {
            Error::provider_not_found(
                name,
                DATABASE_PROVIDERS
                    .iter()
                    .map(|e| e.name.to_string())
                    .collect(),
            )
        })
}

/// List all registered database providers
///
/// Returns (name, description) tuples sorted by name.
pub fn list_database_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<_> = DATABASE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    providers.sort_by_key(|(name, _)| name.to_ascii_lowercase());
    providers
}
