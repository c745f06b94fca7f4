//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "fireasy.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "fireasy";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "FIREASY";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SECTIONS
// ============================================================================

/// Separator between segments of a section path
pub const SECTION_SEPARATOR: char = ':';

/// Root table holding every Fireasy section
pub const ROOT_SECTION: &str = "fireasy";

/// Imports section
pub const SECTION_IMPORTS: &str = "fireasy:imports";

/// Data instances section
pub const SECTION_DATA_INSTANCES: &str = "fireasy:dataInstances";

/// Provider aliases section
pub const SECTION_PROVIDERS: &str = "fireasy:providers";

/// Locking section
pub const SECTION_LOCKING: &str = "fireasy:locking";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "FIREASY_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "fireasy";

// ============================================================================
// LOCKING
// ============================================================================

/// Default lock wait in seconds
pub const DEFAULT_LOCK_TIMEOUT_SECS: u64 = 30;
