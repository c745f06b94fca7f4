//! ODBC database provider
//!
//! Adapts ODBC `key=value;` connection strings. The `Driver` key selects a
//! feature (the database family behind the driver), and the featured clone
//! knows that family's connection-string conventions.
//!
//! ## Example
//!
//! ```ignore
//! use fireasy_providers::database::OdbcProvider;
//!
//! let cs = ConnectionString::new("Driver={ODBC Driver 18 for SQL Server};Server=db01,1433");
//! let feature = OdbcProvider::new().detect_feature(&cs); // Some("sqlserver")
//! ```

use std::sync::Arc;

use fireasy_domain::constants::{
    FEATURE_ACCESS, FEATURE_EXCEL, FEATURE_MYSQL, FEATURE_ORACLE, FEATURE_POSTGRESQL,
    FEATURE_SQLITE, FEATURE_SQLSERVER, KEY_DRIVER, PORT_KEYS, PROVIDER_ODBC, SERVER_KEYS,
};
use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::providers::{DatabaseProvider, FeaturedProvider};
use fireasy_domain::value_objects::{ConnectionParameter, ConnectionString};

use crate::constants::ODBC_DRIVER_FEATURES;

const SUPPORTED_FEATURES: &[&str] = &[
    FEATURE_SQLSERVER,
    FEATURE_MYSQL,
    FEATURE_ORACLE,
    FEATURE_POSTGRESQL,
    FEATURE_SQLITE,
    FEATURE_ACCESS,
    FEATURE_EXCEL,
];

/// ODBC driver adapter
///
/// The base instance carries no feature. SQL Server clones read and write
/// the port as part of the server (`Server=host,port`).
#[derive(Debug, Clone, Default)]
pub struct OdbcProvider {
    feature: Option<String>,
}

impl OdbcProvider {
    /// Create the feature-less provider
    pub fn new() -> Self {
        Self::default()
    }

    fn is_sqlserver(&self) -> bool {
        self.feature.as_deref() == Some(FEATURE_SQLSERVER)
    }
}

impl DatabaseProvider for OdbcProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_ODBC
    }

    fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    fn get_connection_parameter(
        &self,
        connection: &ConnectionString,
    ) -> Result<ConnectionParameter> {
        if connection.is_url() {
            return Err(Error::invalid_connection_string(
                "ODBC connection strings use key=value pairs",
            ));
        }
        let mut parameter = ConnectionParameter::from_pairs(connection)?;

        if self.is_sqlserver()
            && parameter.port.is_none()
            && let Some((host, port)) = parameter.server.as_deref().and_then(split_host_port)
        {
            parameter.server = Some(host);
            parameter.port = Some(port);
        }
        Ok(parameter)
    }

    fn update_connection_string(
        &self,
        connection: &ConnectionString,
        parameter: &ConnectionParameter,
    ) -> Result<ConnectionString> {
        if connection.is_url() {
            return Err(Error::invalid_connection_string(
                "ODBC connection strings use key=value pairs",
            ));
        }
        let mut updated = connection.clone();
        let mut parameter = parameter.clone();

        // SQL Server without an explicit Port key keeps the port in Server
        if self.is_sqlserver()
            && connection.get_any(PORT_KEYS).is_none()
            && let Some(port) = parameter.port.take()
        {
            let host = parameter
                .server
                .take()
                .or_else(|| connection.get_any(SERVER_KEYS).map(strip_port))
                .unwrap_or_default();
            parameter.server = Some(format!("{host},{port}"));
        }
        parameter.apply_to_pairs(&mut updated);
        Ok(updated)
    }

    fn as_featured(&self) -> Option<&dyn FeaturedProvider> {
        Some(self)
    }
}

impl FeaturedProvider for OdbcProvider {
    fn supported_features(&self) -> &'static [&'static str] {
        SUPPORTED_FEATURES
    }

    fn detect_feature(&self, connection: &ConnectionString) -> Option<String> {
        let driver = connection.get(KEY_DRIVER)?.to_lowercase();
        ODBC_DRIVER_FEATURES
            .iter()
            .find(|(_, fragments)| fragments.iter().any(|f| driver.contains(f)))
            .map(|(feature, _)| (*feature).to_string())
    }

    fn with_feature(&self, feature: &str) -> Arc<dyn DatabaseProvider> {
        Arc::new(Self {
            feature: Some(feature.to_string()),
        })
    }
}

/// Split `host,port` (SQL Server notation)
fn split_host_port(server: &str) -> Option<(String, u16)> {
    let (host, port) = server.rsplit_once(',')?;
    let port = port.trim().parse().ok()?;
    Some((host.trim().to_string(), port))
}

fn strip_port(server: &str) -> String {
    split_host_port(server).map_or_else(|| server.to_string(), |(host, _)| host)
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use fireasy_application::ports::registry::{
    DATABASE_PROVIDERS, DatabaseProviderEntry, TYPE_DESCRIPTORS, TypeDescriptorEntry,
};

fn create_odbc_provider() -> Arc<dyn DatabaseProvider> {
    Arc::new(OdbcProvider::new())
}

#[linkme::distributed_slice(DATABASE_PROVIDERS)]
static ODBC_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
    name: PROVIDER_ODBC,
    description: "ODBC driver adapter (featured by Driver)",
    factory: create_odbc_provider,
};

#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
static ODBC_TYPE: TypeDescriptorEntry = TypeDescriptorEntry {
    name: "fireasy_providers::database::OdbcProvider",
    aliases: &["OdbcProvider", PROVIDER_ODBC],
    description: "ODBC driver adapter",
    provider_factory: Some(create_odbc_provider),
};
