//! Application ports
//!
//! - `deployer`: startup hook contract
//! - `registry`: link-time registration slices
//! - `providers`: re-export of the domain provider ports

pub mod deployer;
pub mod registry;

/// Provider ports re-exported from the domain layer
pub mod providers {
    pub use fireasy_domain::ports::providers::*;
}

pub use deployer::ServicesDeployer;
