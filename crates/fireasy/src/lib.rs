//! # Fireasy
//!
//! Database provider registry, configuration section binding, services
//! deployers, object mapping and named locks.
//!
//! ## Example
//!
//! ```ignore
//! use fireasy::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let provider = context.provider_for("main")?;
//! let parameter = provider.get_connection_parameter(&setting.connection_string)?;
//! ```
//!
//! ## Layers
//!
//! - `domain` - error type, connection value objects, provider and lock ports
//! - `application` - provider registry, type resolver, service collection,
//!   deployer discovery, locker and mapper
//! - `infrastructure` - figment configuration, section binder, logging, bootstrap
//! - `providers` - ODBC, OleDb and MongoDB adapters, local locks, JSON mapping

// Force-link fireasy-providers so its linkme registrations are included
extern crate fireasy_providers;

pub mod cli;

/// Domain layer - error type, value objects and ports
pub mod domain {
    pub use fireasy_domain::*;
}

/// Application layer - registry, resolver, services and use cases
pub mod application {
    pub use fireasy_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use fireasy_infrastructure::*;
}

/// Bundled provider implementations
pub mod providers {
    pub use fireasy_providers::*;
}

pub use fireasy_application::{ProviderRegistry, ServiceCollection, ServicesDeployer};
pub use fireasy_domain::{ConnectionParameter, ConnectionString, DataInstanceSetting, Error, Result};
pub use fireasy_infrastructure::{AppContext, ConfigLoader, init_app};
