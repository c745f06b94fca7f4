//! Domain services
//!
//! Lookup structures populated at composition time and read afterwards.

pub mod provider_registry;
pub mod type_resolver;

pub use provider_registry::{ProviderFactory, ProviderRegistry};
pub use type_resolver::{ResolvedType, TypeResolver};
