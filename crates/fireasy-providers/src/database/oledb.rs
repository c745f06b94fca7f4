//! OleDb database provider
//!
//! Feature detection reads the `Provider` key: Jet / ACE engines map to
//! `access` (or `excel` when `Extended Properties` names an Excel format),
//! SQLOLEDB-style providers to `sqlserver`, and Oracle providers to
//! `oracle`. Connection parameter handling is not implemented for OleDb;
//! both connection operations fail with `Error::NotImplemented`.

use std::sync::Arc;

use fireasy_domain::constants::{
    FEATURE_ACCESS, FEATURE_EXCEL, FEATURE_ORACLE, FEATURE_SQLSERVER, KEY_EXTENDED_PROPERTIES,
    KEY_PROVIDER, PROVIDER_OLEDB,
};
use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::providers::{DatabaseProvider, FeaturedProvider};
use fireasy_domain::value_objects::{ConnectionParameter, ConnectionString};
use tracing::warn;

use crate::constants::{OLEDB_JET_PREFIXES, OLEDB_ORACLE_PREFIXES, OLEDB_SQLSERVER_PREFIXES};

const SUPPORTED_FEATURES: &[&str] = &[FEATURE_ACCESS, FEATURE_EXCEL, FEATURE_SQLSERVER, FEATURE_ORACLE];

/// OleDb driver adapter
#[derive(Debug, Clone, Default)]
pub struct OleDbProvider {
    feature: Option<String>,
}

impl OleDbProvider {
    /// Create the feature-less provider
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatabaseProvider for OleDbProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_OLEDB
    }

    fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    fn get_connection_parameter(
        &self,
        _connection: &ConnectionString,
    ) -> Result<ConnectionParameter> {
        warn!(provider = PROVIDER_OLEDB, "Connection parameters requested from OleDb");
        Err(Error::not_implemented(
            PROVIDER_OLEDB,
            "get_connection_parameter",
        ))
    }

    fn update_connection_string(
        &self,
        _connection: &ConnectionString,
        _parameter: &ConnectionParameter,
    ) -> Result<ConnectionString> {
        warn!(provider = PROVIDER_OLEDB, "Connection string update requested from OleDb");
        Err(Error::not_implemented(
            PROVIDER_OLEDB,
            "update_connection_string",
        ))
    }

    fn as_featured(&self) -> Option<&dyn FeaturedProvider> {
        Some(self)
    }
}

impl FeaturedProvider for OleDbProvider {
    fn supported_features(&self) -> &'static [&'static str] {
        SUPPORTED_FEATURES
    }

    fn detect_feature(&self, connection: &ConnectionString) -> Option<String> {
        let provider = connection.get(KEY_PROVIDER)?.trim().to_lowercase();
        let starts_with_any = |prefixes: &[&str]| prefixes.iter().any(|p| provider.starts_with(p));

        let feature = if starts_with_any(OLEDB_JET_PREFIXES) {
            let excel = connection
                .get(KEY_EXTENDED_PROPERTIES)
                .is_some_and(|props| props.to_lowercase().contains("excel"));
            if excel { FEATURE_EXCEL } else { FEATURE_ACCESS }
        } else if starts_with_any(OLEDB_SQLSERVER_PREFIXES) {
            FEATURE_SQLSERVER
        } else if starts_with_any(OLEDB_ORACLE_PREFIXES) {
            FEATURE_ORACLE
        } else {
            return None;
        };
        Some(feature.to_string())
    }

    fn with_feature(&self, feature: &str) -> Arc<dyn DatabaseProvider> {
        Arc::new(Self {
            feature: Some(feature.to_string()),
        })
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use fireasy_application::ports::registry::{
    DATABASE_PROVIDERS, DatabaseProviderEntry, TYPE_DESCRIPTORS, TypeDescriptorEntry,
};

fn create_oledb_provider() -> Arc<dyn DatabaseProvider> {
    Arc::new(OleDbProvider::new())
}

#[linkme::distributed_slice(DATABASE_PROVIDERS)]
static OLEDB_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
    name: PROVIDER_OLEDB,
    description: "OleDb driver adapter (featured by Provider)",
    factory: create_oledb_provider,
};

#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
static OLEDB_TYPE: TypeDescriptorEntry = TypeDescriptorEntry {
    name: "fireasy_providers::database::OleDbProvider",
    aliases: &["OleDbProvider", PROVIDER_OLEDB],
    description: "OleDb driver adapter",
    provider_factory: Some(create_oledb_provider),
};
