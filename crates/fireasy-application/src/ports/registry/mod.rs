//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for providers, deployers
//! and nameable types. Uses the `linkme` crate for link-time registration
//! of entries that are discovered at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Registration Flow                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(SLICE)]      │
//! │                        static ENTRY: Entry = ...                │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static SLICE: [Entry] = [..]         │
//! │                              ↓                                  │
//! │  3. Discovery queries: SLICE.iter()                             │
//! │                              ↓                                  │
//! │  4. Config selects:    providerName = "Odbc" → OdbcProvider     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Provider (in fireasy-providers)
//!
//! ```ignore
//! use fireasy_application::ports::registry::{DatabaseProviderEntry, DATABASE_PROVIDERS};
//!
//! #[linkme::distributed_slice(DATABASE_PROVIDERS)]
//! static ODBC_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
//!     name: "Odbc",
//!     description: "ODBC driver adapter",
//!     factory: create_odbc_provider,
//! };
//! ```

pub mod database;
pub mod deployer;
pub mod types;

// Re-export all registry types and functions
pub use database::{
    DATABASE_PROVIDERS, DatabaseProviderEntry, list_database_providers,
    resolve_database_provider,
};
pub use deployer::{SERVICE_DEPLOYERS, ServicesDeployerEntry, list_services_deployers};
pub use types::{TYPE_DESCRIPTORS, TypeDescriptorEntry, list_type_descriptors};
