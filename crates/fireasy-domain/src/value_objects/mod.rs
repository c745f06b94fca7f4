//! Value Objects
//!
//! Immutable data carried between the registry, the providers and the
//! configuration layer.

/// Connection strings and decomposed connection parameters
pub mod connection;
/// Named database instances
pub mod instance;

pub use connection::{ConnectionParameter, ConnectionString};
pub use instance::DataInstanceSetting;
