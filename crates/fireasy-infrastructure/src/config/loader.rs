//! Configuration loader
//!
//! Sources are merged in this order, later ones overriding earlier ones:
//!
//! 1. `AppConfig::default()`
//! 2. The TOML file (explicit path, or the first default location found)
//! 3. Environment variables: `FIREASY__LOGGING__LEVEL=debug` sets
//!    `logging.level`
//!
//! Environment keys arrive lower-cased; section binding matches keys
//! case-insensitively, so `FIREASY__FIREASY__DATAINSTANCES__MAIN__PROVIDERNAME`
//! still reaches `providerName`.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use fireasy_application::TypeResolver;
use fireasy_domain::error::Result;

use crate::config::{AppConfig, ConfigRoot, DataInstancesSetting, LockSetting};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader with the default prefix and file search
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Self::defaults();

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        Self::extract(&figment)
    }

    /// Load defaults merged with a TOML document, ignoring files and environment
    pub fn load_from_str(&self, toml: &str) -> Result<AppConfig> {
        Self::extract(&Self::defaults().merge(Toml::string(toml)))
    }

    /// Reload configuration from the same sources
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;
        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Environment variable prefix
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(AppConfig::default()))
    }

    fn extract(figment: &Figment) -> Result<AppConfig> {
        let config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;
        validate_app_config(&config)?;
        Ok(config)
    }

    /// First existing file among the default locations
    ///
    /// Working directory, `./fireasy/`, the user config directory, then
    /// `~/.fireasy/`.
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate the loaded configuration
///
/// Sections are bound without type resolution here; only plain values are
/// checked.
fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;

    let root = ConfigRoot::from_config(config, TypeResolver::new());
    if let Some(instances) = root.section::<DataInstancesSetting>()? {
        instances.validate()?;
    }
    if let Some(locking) = root.section::<LockSetting>()? {
        locking.validate()?;
    }
    Ok(())
}
