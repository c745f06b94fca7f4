//! Application use cases
//!
//! - `deployment`: deployer discovery and ordered execution
//! - `locking`: work under a named lock
//! - `mapping`: typed object mapping facade
//! - `providers`: provider registration helpers for deployers

pub mod deployment;
pub mod locking;
pub mod mapping;
pub mod providers;

pub use deployment::{DeployerDiscovery, DeploymentReport};
pub use locking::{DEFAULT_LOCK_TIMEOUT, DistributedLocker, LockFallback, LockOptions};
pub use mapping::ObjectMapper;
pub use providers::ProviderServicesExt;
