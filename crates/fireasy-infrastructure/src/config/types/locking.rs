//! `fireasy:locking` section

use std::time::Duration;

use fireasy_application::LockOptions;
use fireasy_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::binder::{BindingContext, SectionBinder, SettingsSection};
use crate::constants::{DEFAULT_LOCK_TIMEOUT_SECS, SECTION_LOCKING};

/// Lock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LockSetting {
    /// Default wait for a lock, in seconds
    pub timeout_secs: u64,
}

impl Default for LockSetting {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_LOCK_TIMEOUT_SECS,
        }
    }
}

impl LockSetting {
    /// Locker options for the service collection
    pub fn to_options(self) -> LockOptions {
        LockOptions {
            default_timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// The timeout must be positive
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::configuration("Lock timeout cannot be 0"));
        }
        Ok(())
    }
}

impl SettingsSection for LockSetting {
    const PATH: &'static str = SECTION_LOCKING;

    fn bind(section: &BindingContext<'_>) -> Result<Self> {
        SectionBinder::bind_serde(section)
    }
}
