//! Object Mapping Engine Implementations
//!
//! The `mapping` deployer registers an `ObjectMapper` over
//! [`JsonMappingEngine`].

pub mod json;

pub use json::JsonMappingEngine;
