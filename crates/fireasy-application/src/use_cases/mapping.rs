//! Object mapper facade
//!
//! Typed `map` / `map_into` over an injected [`MappingEngine`]. The facade
//! only converts to and from the serde data model; all mapping rules live
//! in the engine.

use std::sync::Arc;

use fireasy_domain::error::Result;
use fireasy_domain::ports::providers::MappingEngine;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed object-to-object mapper
#[derive(Clone)]
pub struct ObjectMapper {
    engine: Arc<dyn MappingEngine>,
}

impl ObjectMapper {
    /// Create a mapper delegating to `engine`
    pub fn new(engine: Arc<dyn MappingEngine>) -> Self {
        Self { engine }
    }

    /// Name of the underlying engine
    pub fn engine_name(&self) -> &str {
        self.engine.engine_name()
    }

    /// Map `source` into a new destination value
    pub fn map<S, D>(&self, source: &S) -> Result<D>
    where
        S: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let source = serde_json::to_value(source)?;
        let mapped = self.engine.map_value(source, None)?;
        Ok(serde_json::from_value(mapped)?)
    }

    /// Map `source` onto an existing `destination` and return it
    pub fn map_into<S, D>(&self, source: &S, destination: D) -> Result<D>
    where
        S: Serialize + ?Sized,
        D: Serialize + DeserializeOwned,
    {
        let source = serde_json::to_value(source)?;
        let destination = serde_json::to_value(&destination)?;
        let mapped = self.engine.map_value(source, Some(destination))?;
        Ok(serde_json::from_value(mapped)?)
    }
}

impl std::fmt::Debug for ObjectMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectMapper")
            .field("engine", &self.engine.engine_name())
            .finish()
    }
}
