//! Checkstyle-style XML configuration.
//!
//! ```xml
//! <module name="Checker">
//!   <module name="TreeWalker">
//!     <module name="NamingPattern">
//!       <property name="tokens" value="CLASS_DEF, INTERFACE_DEF"/>
//!     </module>
//!   </module>
//! </module>
//! ```

use serde::Deserialize;

use crate::{ConfigError, ModuleConfig};

#[derive(Debug, Deserialize)]
struct XmlModule {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "property", default)]
    properties: Vec<XmlProperty>,
    #[serde(rename = "module", default)]
    modules: Vec<XmlModule>,
}

#[derive(Debug, Deserialize)]
struct XmlProperty {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value", default)]
    value: String,
}

pub(crate) fn parse(source: &str) -> Result<Vec<ModuleConfig>, ConfigError> {
    let root: XmlModule = quick_xml::de::from_str(source)?;
    let mut modules = vec![];
    flatten(root, &mut modules);
    Ok(modules)
}

fn flatten(module: XmlModule, out: &mut Vec<ModuleConfig>) {
    let config = ModuleConfig {
        name: module.name,
        properties: module
            .properties
            .into_iter()
            .map(|p| (p.name, p.value))
            .collect(),
    };
    out.push(config);

    for child in module.modules {
        flatten(child, out);
    }
}
