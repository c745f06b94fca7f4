//! Data instance value objects

use serde::{Deserialize, Serialize};

use super::connection::ConnectionString;

/// A named database instance
///
/// Pairs a provider name with the connection string that selects the
/// provider's feature. This is the input of provider resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataInstanceSetting {
    /// Instance name
    #[serde(default)]
    pub name: String,
    /// Registry key of the provider (case-insensitive)
    pub provider_name: String,
    /// Connection string handed to the provider
    pub connection_string: ConnectionString,
    /// Whether this instance is used when no name is given
    #[serde(default)]
    pub is_default: bool,
}

impl DataInstanceSetting {
    /// Create a new setting
    pub fn new(
        name: impl Into<String>,
        provider_name: impl Into<String>,
        connection_string: impl Into<ConnectionString>,
    ) -> Self {
        Self {
            name: name.into(),
            provider_name: provider_name.into(),
            connection_string: connection_string.into(),
            is_default: false,
        }
    }

    /// Mark this instance as the default one
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}
