//! Domain layer constants
//!
//! Provider names, connection-string keys and feature identifiers shared by
//! the registry and the provider implementations.

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// Registry key of the ODBC provider
pub const PROVIDER_ODBC: &str = "Odbc";

/// Registry key of the OleDb provider
pub const PROVIDER_OLEDB: &str = "OleDb";

/// Registry key of the MongoDB provider
pub const PROVIDER_MONGODB: &str = "MongoDB";

// ============================================================================
// CONNECTION STRING KEYS
// ============================================================================

/// Driver key used by ODBC connection strings
pub const KEY_DRIVER: &str = "Driver";

/// Provider key used by OleDb connection strings
pub const KEY_PROVIDER: &str = "Provider";

/// OleDb extended properties key
pub const KEY_EXTENDED_PROPERTIES: &str = "Extended Properties";

/// Keys that name the server, in lookup order
pub const SERVER_KEYS: &[&str] = &["Server", "Data Source", "Host", "Address"];

/// Keys that name the database, in lookup order
pub const DATABASE_KEYS: &[&str] = &["Database", "Initial Catalog", "Dbq"];

/// Keys that name the login, in lookup order
pub const USER_KEYS: &[&str] = &["Uid", "User Id", "User", "UserName"];

/// Keys that carry the password, in lookup order
pub const PASSWORD_KEYS: &[&str] = &["Pwd", "Password"];

/// Keys that carry the port
pub const PORT_KEYS: &[&str] = &["Port"];

/// Keys that carry the schema
pub const SCHEMA_KEYS: &[&str] = &["Schema", "Current Schema"];

// ============================================================================
// FEATURES
// ============================================================================

/// SQL Server feature
pub const FEATURE_SQLSERVER: &str = "sqlserver";

/// MySQL feature
pub const FEATURE_MYSQL: &str = "mysql";

/// Oracle feature
pub const FEATURE_ORACLE: &str = "oracle";

/// PostgreSQL feature
pub const FEATURE_POSTGRESQL: &str = "postgresql";

/// SQLite feature
pub const FEATURE_SQLITE: &str = "sqlite";

/// Microsoft Access feature
pub const FEATURE_ACCESS: &str = "access";

/// Microsoft Excel feature
pub const FEATURE_EXCEL: &str = "excel";

/// URL scheme of MongoDB connection strings
pub const MONGODB_SCHEME: &str = "mongodb://";

/// URL scheme of MongoDB SRV connection strings
pub const MONGODB_SRV_SCHEME: &str = "mongodb+srv://";
