//! Serde-value mapping engine
//!
//! Maps through `serde_json::Value`: fields match by name, and mapping onto
//! an existing destination overlays the source's non-null fields, merging
//! nested objects field by field.

use std::sync::Arc;

use fireasy_application::ObjectMapper;
use fireasy_application::services::ServiceCollection;
use fireasy_domain::error::Result;
use fireasy_domain::ports::providers::MappingEngine;
use serde_json::Value;
use tracing::debug;

use crate::constants::{BUILTIN_DEPLOYER_PRIORITY, DEPLOYER_MAPPING, JSON_MAPPING_ENGINE_NAME};

/// Mapping engine over the serde data model
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMappingEngine;

impl JsonMappingEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }
}

impl MappingEngine for JsonMappingEngine {
    fn engine_name(&self) -> &str {
        JSON_MAPPING_ENGINE_NAME
    }

    fn map_value(&self, source: Value, destination: Option<Value>) -> Result<Value> {
        Ok(match destination {
            Some(mut destination) => {
                overlay(&mut destination, source);
                destination
            }
            None => source,
        })
    }
}

fn overlay(destination: &mut Value, source: Value) {
    match (destination, source) {
        (_, Value::Null) => {}
        (Value::Object(target), Value::Object(fields)) => {
            for (name, value) in fields {
                if value.is_null() {
                    continue;
                }
                if let Some(existing) = target.get_mut(&name)
                    && existing.is_object()
                    && value.is_object()
                {
                    overlay(existing, value);
                    continue;
                }
                target.insert(name, value);
            }
        }
        (destination, source) => *destination = source,
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use fireasy_application::ports::registry::{
    SERVICE_DEPLOYERS, ServicesDeployerEntry, TYPE_DESCRIPTORS, TypeDescriptorEntry,
};

fn deploy_object_mapper(services: &mut ServiceCollection) -> Result<()> {
    debug!(engine = JSON_MAPPING_ENGINE_NAME, "Registering object mapper");
    services.add_singleton(ObjectMapper::new(Arc::new(JsonMappingEngine::new())));
    Ok(())
}

#[linkme::distributed_slice(SERVICE_DEPLOYERS)]
static MAPPING_DEPLOYER: ServicesDeployerEntry = ServicesDeployerEntry {
    name: DEPLOYER_MAPPING,
    description: "Object mapper over the serde-value engine",
    priority: BUILTIN_DEPLOYER_PRIORITY,
    depends_on: &[],
    configure: deploy_object_mapper,
};

#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
static JSON_MAPPING_TYPE: TypeDescriptorEntry = TypeDescriptorEntry {
    name: "fireasy_providers::mapping::JsonMappingEngine",
    aliases: &["JsonMappingEngine"],
    description: "Object mapping engine over serde_json values",
    provider_factory: None,
};
