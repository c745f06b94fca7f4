//! # Fireasy Domain
//!
//! Core types shared by every Fireasy layer: the error type, connection
//! value objects and the port traits implemented by providers.
//!
//! This crate has no knowledge of configuration sources, the service
//! container or any concrete driver.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{ConnectionParameter, ConnectionString, DataInstanceSetting};
