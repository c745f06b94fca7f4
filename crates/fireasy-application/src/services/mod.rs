//! Service composition
//!
//! The registration surface handed to deployers and the container built
//! from it.

pub mod collection;

pub use collection::{ServiceCollection, ServiceProvider};
