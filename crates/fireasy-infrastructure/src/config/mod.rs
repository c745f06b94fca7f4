//! Configuration loading and section binding
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`loader`] | figment sources: defaults, TOML file, environment |
//! | [`binder`] | Colon-path sections and the binding context |
//! | [`root`] | Section lookup over the `[fireasy]` table |
//! | [`types`] | `AppConfig` and the bound settings types |

pub mod binder;
pub mod loader;
pub mod root;
pub mod types;

pub use binder::{BindingContext, SectionBinder, SectionPath, SettingsSection};
pub use loader::ConfigLoader;
pub use root::ConfigRoot;
pub use types::{
    AppConfig, DataInstancesSetting, ImportSetting, ImportsSetting, LockSetting, LoggingConfig,
    ProviderSetting, ProvidersSetting,
};
