//! Domain Port Interfaces
//!
//! Ports define the contracts that the provider and infrastructure layers
//! implement:
//!
//! - **infrastructure/** - Infrastructure services (locking)
//! - **providers/** - External adapters (database drivers, mapping engines)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{LockGuard, LockProvider};
pub use providers::{DatabaseProvider, FeaturedProvider, MappingEngine};
