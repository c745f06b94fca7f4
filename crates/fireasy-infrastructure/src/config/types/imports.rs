//! `fireasy:imports` section
//!
//! ```toml
//! [fireasy.imports.mongo]
//! assembly = "fireasy_providers"
//! contractType = "DatabaseProvider"
//! importType = "MongoDbProvider"
//! ```

use std::collections::BTreeMap;

use fireasy_application::ResolvedType;
use fireasy_domain::error::Result;
use serde::Serialize;

use crate::config::binder::{BindingContext, SettingsSection};
use crate::constants::SECTION_IMPORTS;

/// One import entry
///
/// Type names are kept verbatim next to their resolution; an unknown name
/// leaves the resolved field `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSetting {
    /// Entry name (the table key)
    pub name: String,
    /// Crate the types come from
    pub assembly: Option<String>,
    /// Contract type name as written
    pub contract_type_name: Option<String>,
    /// Implementation type name as written
    pub import_type_name: Option<String>,
    /// Resolved contract type
    pub contract_type: Option<ResolvedType>,
    /// Resolved implementation type
    pub import_type: Option<ResolvedType>,
}

impl ImportSetting {
    fn bind(entry: &BindingContext<'_>) -> Self {
        Self {
            name: entry.key().to_string(),
            assembly: entry.get_string("assembly"),
            contract_type_name: entry.get_string("contractType"),
            import_type_name: entry.get_string("importType"),
            contract_type: entry.resolve_type("contractType"),
            import_type: entry.resolve_type("importType"),
        }
    }

    /// Whether both types resolved
    pub fn is_resolved(&self) -> bool {
        self.contract_type.is_some() && self.import_type.is_some()
    }
}

/// All import entries by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportsSetting {
    /// Entries by name
    pub settings: BTreeMap<String, ImportSetting>,
}

impl ImportsSetting {
    /// Entry by name
    pub fn get(&self, name: &str) -> Option<&ImportSetting> {
        self.settings.get(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl SettingsSection for ImportsSetting {
    const PATH: &'static str = SECTION_IMPORTS;

    fn bind(section: &BindingContext<'_>) -> Result<Self> {
        let settings = section
            .children()
            .iter()
            .filter(|entry| entry.is_table())
            .map(|entry| (entry.key().to_string(), ImportSetting::bind(entry)))
            .collect();
        Ok(Self { settings })
    }
}
