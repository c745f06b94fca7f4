//! Provider Constants
//!
//! Constants specific to provider implementations. Provider names and
//! connection-string keys shared with the registry live in
//! `fireasy_domain::constants`.

use fireasy_domain::constants::{
    FEATURE_ACCESS, FEATURE_EXCEL, FEATURE_MYSQL, FEATURE_ORACLE, FEATURE_POSTGRESQL,
    FEATURE_SQLITE, FEATURE_SQLSERVER,
};

// ============================================================================
// LOCK PROVIDER CONSTANTS
// ============================================================================

/// Name of the in-process lock provider
pub const LOCAL_LOCK_PROVIDER_NAME: &str = "local";

// ============================================================================
// MAPPING CONSTANTS
// ============================================================================

/// Name of the serde-value mapping engine
pub const JSON_MAPPING_ENGINE_NAME: &str = "json";

// ============================================================================
// DEPLOYER CONSTANTS
// ============================================================================

/// Deployer registering the distributed locker
pub const DEPLOYER_LOCKING: &str = "locking";

/// Deployer registering the object mapper
pub const DEPLOYER_MAPPING: &str = "mapping";

/// Priority of the built-in deployers (application deployers default to 0)
pub const BUILTIN_DEPLOYER_PRIORITY: i32 = -100;

// ============================================================================
// ODBC CONSTANTS
// ============================================================================

/// Driver-name fragments selecting each ODBC feature, checked in order
pub const ODBC_DRIVER_FEATURES: &[(&str, &[&str])] = &[
    (FEATURE_EXCEL, &["excel", "*.xls"]),
    (FEATURE_ACCESS, &["access", "*.mdb", "*.accdb"]),
    (
        FEATURE_SQLSERVER,
        &["sql server", "sqlserver", "sqlncli", "msodbcsql", "sql native client"],
    ),
    (FEATURE_MYSQL, &["mysql", "mariadb"]),
    (FEATURE_ORACLE, &["oracle", "sqora"]),
    (FEATURE_POSTGRESQL, &["postgres", "psqlodbc"]),
    (FEATURE_SQLITE, &["sqlite"]),
];

// ============================================================================
// OLEDB CONSTANTS
// ============================================================================

/// OleDb provider prefixes for the Jet / ACE engines
pub const OLEDB_JET_PREFIXES: &[&str] = &["microsoft.jet.oledb", "microsoft.ace.oledb"];

/// OleDb provider prefixes for SQL Server
pub const OLEDB_SQLSERVER_PREFIXES: &[&str] = &["sqloledb", "msoledbsql", "sqlncli"];

/// OleDb provider prefixes for Oracle
pub const OLEDB_ORACLE_PREFIXES: &[&str] = &["oraoledb", "msdaora"];
