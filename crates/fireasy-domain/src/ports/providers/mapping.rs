//! Object Mapping Port
//!
//! Mapping engines work on the serde data model so they stay object safe;
//! the typed `map`/`map_into` facade lives in the application layer.

use serde_json::Value;

use crate::error::Result;

/// Object-to-object mapping backend
pub trait MappingEngine: Send + Sync {
    /// Name of the engine for diagnostics
    fn engine_name(&self) -> &str;

    /// Map a source value, optionally onto an existing destination value
    fn map_value(&self, source: Value, destination: Option<Value>) -> Result<Value>;
}
