//! Application configuration

use figment::value::{Dict, Tag, Value};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;

/// Loaded configuration
///
/// The `fireasy` table is kept as a raw value tree and bound section by
/// section through `ConfigRoot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tracing setup
    #[serde(default)]
    pub logging: LoggingConfig,

    /// The `[fireasy]` table
    #[serde(default = "empty_table")]
    pub fireasy: Value,
}

fn empty_table() -> Value {
    Value::Dict(Tag::Default, Dict::new())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            fireasy: empty_table(),
        }
    }
}
