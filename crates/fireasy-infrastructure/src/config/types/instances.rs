//! `fireasy:dataInstances` section
//!
//! ```toml
//! [fireasy.dataInstances.main]
//! providerName = "Odbc"
//! connectionString = "Driver={ODBC Driver 18 for SQL Server};Server=db01,1433"
//! isDefault = true
//! ```

use std::collections::BTreeMap;

use fireasy_domain::error::{Error, Result};
use fireasy_domain::value_objects::DataInstanceSetting;

use crate::config::binder::{BindingContext, SettingsSection};
use crate::constants::SECTION_DATA_INSTANCES;

/// Named data instances
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataInstancesSetting {
    /// Instances by name
    pub instances: BTreeMap<String, DataInstanceSetting>,
}

impl DataInstancesSetting {
    /// Instance by name
    pub fn get(&self, name: &str) -> Option<&DataInstanceSetting> {
        self.instances.get(name)
    }

    /// The instance marked `isDefault`, else the first by name
    pub fn default_instance(&self) -> Option<&DataInstanceSetting> {
        self.instances
            .values()
            .find(|instance| instance.is_default)
            .or_else(|| self.instances.values().next())
    }

    /// Instances in name order
    pub fn iter(&self) -> impl Iterator<Item = &DataInstanceSetting> {
        self.instances.values()
    }

    /// Number of instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether there are no instances
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Reject blank provider names or connection strings and multiple defaults
    pub fn validate(&self) -> Result<()> {
        for instance in self.instances.values() {
            if instance.provider_name.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Data instance '{}' has no providerName",
                    instance.name
                )));
            }
            if instance.connection_string.raw().trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Data instance '{}' has no connectionString",
                    instance.name
                )));
            }
        }
        let defaults: Vec<&str> = self
            .instances
            .values()
            .filter(|instance| instance.is_default)
            .map(|instance| instance.name.as_str())
            .collect();
        if defaults.len() > 1 {
            return Err(Error::configuration(format!(
                "More than one default data instance: {}",
                defaults.join(", ")
            )));
        }
        Ok(())
    }
}

fn bind_instance(entry: &BindingContext<'_>) -> Result<DataInstanceSetting> {
    let mut instance = DataInstanceSetting::new(
        entry.key(),
        entry.get_string("providerName").unwrap_or_default(),
        entry.get_string("connectionString").unwrap_or_default(),
    );
    instance.is_default = entry.get::<bool>("isDefault")?.unwrap_or(false);
    Ok(instance)
}

impl SettingsSection for DataInstancesSetting {
    const PATH: &'static str = SECTION_DATA_INSTANCES;

    fn bind(section: &BindingContext<'_>) -> Result<Self> {
        let mut instances = BTreeMap::new();
        for entry in section.children().iter().filter(|entry| entry.is_table()) {
            instances.insert(entry.key().to_string(), bind_instance(entry)?);
        }
        Ok(Self { instances })
    }
}
