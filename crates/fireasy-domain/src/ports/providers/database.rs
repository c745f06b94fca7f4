//! Database Provider Port
//!
//! Defines the contract every database driver adapter implements, plus the
//! optional featured-provider capability used to pick a driver variant from
//! the connection string.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{ConnectionParameter, ConnectionString};

/// Database provider interface
///
/// A provider adapts one driver family (ODBC, OleDb, MongoDB, ...).
pub trait DatabaseProvider: Send + Sync + fmt::Debug {
    /// Registry name of this provider (e.g. `"Odbc"`)
    fn provider_name(&self) -> &str;

    /// Feature this instance was configured for, if any
    fn feature(&self) -> Option<&str> {
        None
    }

    /// Decompose a connection string into its parameters
    fn get_connection_parameter(&self, connection: &ConnectionString)
    -> Result<ConnectionParameter>;

    /// Produce a connection string with the given parameters applied
    fn update_connection_string(
        &self,
        connection: &ConnectionString,
        parameter: &ConnectionParameter,
    ) -> Result<ConnectionString>;

    /// Featured-provider capability, when supported
    fn as_featured(&self) -> Option<&dyn FeaturedProvider> {
        None
    }
}

/// Provider that can specialise itself from connection-string contents
pub trait FeaturedProvider: DatabaseProvider {
    /// Features this provider knows how to select
    fn supported_features(&self) -> &'static [&'static str];

    /// Inspect the connection string and pick a feature
    fn detect_feature(&self, connection: &ConnectionString) -> Option<String>;

    /// Clone this provider configured for `feature`
    fn with_feature(&self, feature: &str) -> Arc<dyn DatabaseProvider>;
}
