//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | DatabaseProvider | Database driver adapter |
//! | FeaturedProvider | Driver variant selection from a connection string |
//! | MappingEngine | Object-to-object mapping backend |

/// Database driver adapters
pub mod database;
/// Object mapping backends
pub mod mapping;

pub use database::{DatabaseProvider, FeaturedProvider};
pub use mapping::MappingEngine;
