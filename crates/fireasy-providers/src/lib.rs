//! # Fireasy - Provider Implementations
//!
//! Concrete adapters for the ports defined in `fireasy-domain`. Every
//! implementation registers itself through the `linkme` slices declared in
//! `fireasy-application`, so an application only needs to link this crate.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Database | `DatabaseProvider` | Odbc, OleDb, MongoDB |
//! | Lock | `LockProvider` | Local |
//! | Mapping | `MappingEngine` | Json |
//!
//! ## Built-in deployers
//!
//! | Deployer | Registers |
//! |----------|-----------|
//! | `locking` | `DistributedLocker` over [`lock::LocalLockProvider`] |
//! | `mapping` | `ObjectMapper` over [`mapping::JsonMappingEngine`] |
//!
//! ## Usage
//!
//! ```ignore
//! // Make sure the registrations are linked in
//! extern crate fireasy_providers;
//!
//! let registry = ProviderRegistry::with_registered();
//! let odbc = registry.get_provider("odbc");
//! ```

pub use fireasy_domain::error::{Error, Result};
pub use fireasy_domain::ports::providers::{DatabaseProvider, FeaturedProvider, MappingEngine};

/// Provider-specific constants
pub mod constants;

/// Database provider implementations
pub mod database;

/// Lock provider implementations
pub mod lock;

/// Mapping engine implementations
pub mod mapping;
