//! Configuration types
//!
//! [`AppConfig`] is what the loader extracts; the `*Setting` types are bound
//! from sections of its `fireasy` table.

pub mod app;
pub mod imports;
pub mod instances;
pub mod locking;
pub mod logging;
pub mod providers;

pub use app::AppConfig;
pub use imports::{ImportSetting, ImportsSetting};
pub use instances::DataInstancesSetting;
pub use locking::LockSetting;
pub use logging::LoggingConfig;
pub use providers::{ProviderSetting, ProvidersSetting};
