//! # Infrastructure Layer
//!
//! Configuration, logging and the composition root.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | figment loading and `fireasy:*` section binding |
//! | [`di`] | `AppContext` bootstrap over the service collection |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | File names, prefixes and section paths |

// Linked for its provider, deployer and type registrations
extern crate fireasy_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, ConfigRoot};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
