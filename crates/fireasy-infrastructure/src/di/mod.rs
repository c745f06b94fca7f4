//! Composition root
//!
//! Loads the bound settings, seeds the service collection, runs every
//! linked deployer and freezes the container.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app, init_app_with};
