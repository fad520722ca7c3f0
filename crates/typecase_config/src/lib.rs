//! Rule configuration loading.
//!
//! A configuration is a list of modules, each naming a rule and carrying
//! string properties. It can be written as checkstyle-style XML or as TOML.

mod error;
mod toml_config;
mod xml;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub use error::ConfigError;

/// Property map handed to a rule when it is built from configuration.
pub type Properties<'a> = HashMap<&'a str, &'a str>;

/// A configured module: the rule name and its properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleConfig {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}

impl ModuleConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Borrowed view of the properties, in the shape rules consume.
    pub fn properties(&self) -> Properties<'_> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

/// A loaded configuration. Nested modules are flattened in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    modules: Vec<ModuleConfig>,
}

impl Config {
    pub fn new(modules: Vec<ModuleConfig>) -> Self {
        Self { modules }
    }

    pub fn from_xml_str(source: &str) -> Result<Self, ConfigError> {
        xml::parse(source).map(Self::new)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml_config::parse(source).map(Self::new)
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("xml") => Self::from_xml_str(&read()?),
            Some("toml") => Self::from_toml_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn modules(&self) -> &[ModuleConfig] {
        &self.modules
    }

    /// First module with the given name.
    pub fn module(&self, name: &str) -> Option<&ModuleConfig> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// Properties of the named module, empty if the module is not configured.
    pub fn properties_for(&self, name: &str) -> Properties<'_> {
        self.module(name)
            .map(ModuleConfig::properties)
            .unwrap_or_default()
    }
}
