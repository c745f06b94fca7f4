//! Services Deployer Port
//!
//! A deployer is a startup hook that registers services into the shared
//! [`ServiceCollection`].

use fireasy_domain::error::Result;

use crate::services::ServiceCollection;

/// Startup hook contributing services to the container
pub trait ServicesDeployer: Send + Sync {
    /// Unique deployer name, used for dependency declarations
    fn name(&self) -> &str;

    /// Ordering hint among deployers whose dependencies are satisfied
    fn priority(&self) -> i32 {
        0
    }

    /// Deployers that must have run before this one
    fn depends_on(&self) -> &[&'static str] {
        &[]
    }

    /// Register services
    fn configure(&self, services: &mut ServiceCollection) -> Result<()>;
}
