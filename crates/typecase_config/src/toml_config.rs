//! TOML configuration.
//!
//! ```toml
//! [[module]]
//! name = "NamingPattern"
//!
//! [module.properties]
//! tokens = "CLASS_DEF"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{ConfigError, ModuleConfig};

#[derive(Debug, Deserialize)]
struct TomlConfig {
    #[serde(rename = "module", default)]
    modules: Vec<TomlModule>,
}

#[derive(Debug, Deserialize)]
struct TomlModule {
    name: String,
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

pub(crate) fn parse(source: &str) -> Result<Vec<ModuleConfig>, ConfigError> {
    let config: TomlConfig = toml::from_str(source)?;
    Ok(config
        .modules
        .into_iter()
        .map(|m| ModuleConfig {
            name: m.name,
            properties: m.properties,
        })
        .collect())
}
