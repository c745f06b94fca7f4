//! Services Deployer Registry
//!
//! Link-time marker for startup hooks. A crate that wants to contribute
//! services declares an entry in [`SERVICE_DEPLOYERS`]; discovery collects
//! every entry linked into the binary.
//!
//! ```ignore
//! #[linkme::distributed_slice(SERVICE_DEPLOYERS)]
//! static ORDERS_DEPLOYER: ServicesDeployerEntry = ServicesDeployerEntry {
//!     name: "orders",
//!     description: "Order repositories",
//!     priority: 100,
//!     depends_on: &["locking"],
//!     configure: |services| {
//!         services.add_singleton(OrderRepository::default());
//!         Ok(())
//!     },
//! };
//! ```

use fireasy_domain::error::Result;

use crate::services::ServiceCollection;

/// Registry entry for services deployers
pub struct ServicesDeployerEntry {
    /// Unique deployer name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Lower runs first among deployers whose dependencies are satisfied
    pub priority: i32,
    /// Names of deployers that must run before this one
    pub depends_on: &'static [&'static str],
    /// Configuration hook
    pub configure: fn(&mut ServiceCollection) -> Result<()>,
}

#[linkme::distributed_slice]
pub static SERVICE_DEPLOYERS: [ServicesDeployerEntry] = [..];

/// List all registered services deployers
///
/// Returns (name, description) tuples in link order.
pub fn list_services_deployers() -> Vec<(&'static str, &'static str)> {
    SERVICE_DEPLOYERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
