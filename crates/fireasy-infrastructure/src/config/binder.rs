//! Configuration section binding
//!
//! A section is addressed by a colon path such as `fireasy:dataInstances`;
//! each `:` steps into a nested table of the loaded configuration. The
//! [`BindingContext`] handed to an initializer exposes the node's children
//! and resolves free-form type names.
//!
//! ## Example
//!
//! ```ignore
//! let setting = SectionBinder::bind(&section, |ctx| {
//!     Ok(ImportSetting {
//!         assembly: ctx.get_string("assembly"),
//!         contract_type: ctx.resolve_type("contractType"),
//!         ..ImportSetting::default()
//!     })
//! })?;
//! ```
//!
//! Key lookup is exact first, then case-insensitive, so keys lower-cased by
//! environment overrides still bind.

use std::fmt;

use figment::value::{Dict, Value};
use fireasy_application::{ResolvedType, TypeResolver};
use fireasy_domain::error::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::constants::SECTION_SEPARATOR;
use crate::error_ext::ErrorContext;

/// Colon-separated path of a configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionPath {
    segments: Vec<String>,
}

impl SectionPath {
    /// Parse `a:b:c`; blank segments are dropped
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split(SECTION_SEPARATOR)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Path segments from the root
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, or `""` for the empty path
    pub fn key(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Path of a child node
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    /// Whether the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Dotted key as used by figment (`fireasy.dataInstances`)
    pub fn to_figment_key(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(&SECTION_SEPARATOR.to_string()))
    }
}

/// Look up `key` in a table, exact match first
pub(crate) fn lookup<'v>(dict: &'v Dict, key: &str) -> Option<&'v Value> {
    dict.get(key).or_else(|| {
        dict.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

/// Render a scalar node as the string it was written as
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(_, s) => Some(s.clone()),
        Value::Char(_, c) => Some(c.to_string()),
        Value::Bool(_, b) => Some(b.to_string()),
        Value::Num(..) => match serde_json::to_value(value).ok()? {
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        },
        _ => None,
    }
}

/// A configuration node being bound
#[derive(Clone)]
pub struct BindingContext<'a> {
    path: SectionPath,
    value: &'a Value,
    resolver: &'a TypeResolver,
}

impl<'a> BindingContext<'a> {
    /// Wrap a node found at `path`
    pub fn new(path: SectionPath, value: &'a Value, resolver: &'a TypeResolver) -> Self {
        Self {
            path,
            value,
            resolver,
        }
    }

    /// Path of the node
    pub fn path(&self) -> &SectionPath {
        &self.path
    }

    /// Last path segment (the entry name for children of a table)
    pub fn key(&self) -> &str {
        self.path.key()
    }

    /// Raw value tree
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Type resolver used by [`Self::resolve_type`]
    pub fn resolver(&self) -> &'a TypeResolver {
        self.resolver
    }

    /// The node itself as a string, when it is a scalar
    pub fn as_string(&self) -> Option<String> {
        scalar_string(self.value)
    }

    /// Whether the node is a table
    pub fn is_table(&self) -> bool {
        self.value.as_dict().is_some()
    }

    fn raw_child(&self, key: &str) -> Option<&'a Value> {
        self.value.as_dict().and_then(|dict| lookup(dict, key))
    }

    /// Scalar child value, verbatim
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.raw_child(key).and_then(scalar_string)
    }

    /// Child value deserialized as `T`
    ///
    /// Missing keys give `Ok(None)`; a present value of the wrong shape is a
    /// configuration error naming the full path.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(value) = self.raw_child(key) else {
            return Ok(None);
        };
        let path = self.path.child(key);
        value
            .deserialize::<T>()
            .map(Some)
            .config_context(format!("Invalid value at '{path}'"))
    }

    /// Whole node deserialized as `T`
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let path = self.path.to_string();
        self.value
            .deserialize::<T>()
            .config_context(format!("Invalid section '{path}'"))
    }

    /// Named child node
    pub fn child(&self, key: &str) -> Option<Self> {
        let value = self.raw_child(key)?;
        Some(Self::new(self.path.child(key), value, self.resolver))
    }

    /// Child nodes in key order
    ///
    /// Arrays yield their items keyed by index; scalars have no children.
    pub fn children(&self) -> Vec<Self> {
        match self.value {
            Value::Dict(_, dict) => dict
                .iter()
                .map(|(k, v)| Self::new(self.path.child(k), v, self.resolver))
                .collect(),
            Value::Array(_, items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| Self::new(self.path.child(&i.to_string()), v, self.resolver))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Resolve the type named by a child value
    ///
    /// Absent keys and unknown names both give `None`; the resolver logs
    /// the latter.
    pub fn resolve_type(&self, key: &str) -> Option<ResolvedType> {
        let name = self.get_string(key)?;
        self.resolver.resolve(&name)
    }
}

impl fmt::Debug for BindingContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingContext")
            .field("path", &self.path.to_string())
            .field("value", self.value)
            .finish_non_exhaustive()
    }
}

/// A settings type bound from a fixed section
pub trait SettingsSection: Sized {
    /// Colon path of the section
    const PATH: &'static str;

    /// Build the settings from the section node
    fn bind(section: &BindingContext<'_>) -> Result<Self>;
}

/// Runs initializers over configuration sections
pub struct SectionBinder;

impl SectionBinder {
    /// Produce a settings object by running `initializer` over `section`
    pub fn bind<T, F>(section: &BindingContext<'_>, initializer: F) -> Result<T>
    where
        F: FnOnce(&BindingContext<'_>) -> Result<T>,
    {
        debug!(section = %section.path(), "Binding configuration section");
        initializer(section)
    }

    /// Produce a settings object with serde
    pub fn bind_serde<T: DeserializeOwned>(section: &BindingContext<'_>) -> Result<T> {
        debug!(section = %section.path(), "Binding configuration section with serde");
        section.deserialize()
    }
}
