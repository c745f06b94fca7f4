//! Application Layer - Fireasy
//!
//! Composition logic that sits between the domain ports and the
//! infrastructure that boots an application.
//!
//! ## Contents
//!
//! - `ports::registry`: link-time slices (`DATABASE_PROVIDERS`,
//!   `SERVICE_DEPLOYERS`, `TYPE_DESCRIPTORS`)
//! - `domain_services`: [`ProviderRegistry`] and [`TypeResolver`]
//! - `services`: [`ServiceCollection`] / [`ServiceProvider`] over `dill`
//! - `use_cases`: deployer discovery, named locks, object mapping
//!
//! ## Dependencies
//!
//! This crate depends only on `fireasy-domain` and pure Rust libraries.
//! Concrete providers live in `fireasy-providers` and register themselves
//! into the slices declared here.

pub mod domain_services;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use domain_services::{ProviderRegistry, ResolvedType, TypeResolver};
pub use ports::ServicesDeployer;
pub use services::{ServiceCollection, ServiceProvider};
pub use use_cases::{
    DeployerDiscovery, DeploymentReport, DistributedLocker, LockOptions, ObjectMapper,
    ProviderServicesExt,
};
