use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Tag an installation can track instead of pinning a concrete version
pub const LATEST_VERSION_TAG: &str = "latest";

/// Catalog keyed by `Plugin::plugin_id`
pub type PluginCatalog = HashMap<String, Plugin>;

/// One selectable version of a plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginVersion {
    pub id: String,
    #[serde(default)]
    pub plugin_id: String,
    pub version: String,
    #[serde(default)]
    pub is_latest: bool,
    /// Default settings of this version, as JSON text
    #[serde(default = "null_settings", deserialize_with = "settings_text")]
    pub settings: String,
}

/// Catalog entry: descriptive metadata of a plugin kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub id: String,
    pub plugin_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub npm: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<PluginVersion>,
    /// Tag name -> version string it currently resolves to
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagged_versions: HashMap<String, String>,
}

impl Plugin {
    /// Concrete version the `latest` tag resolves to, if the catalog has one
    pub fn latest_version(&self) -> Option<&str> {
        self.tagged_versions
            .get(LATEST_VERSION_TAG)
            .map(String::as_str)
    }

    pub fn is_latest(&self, version: &str) -> bool {
        self.latest_version() == Some(version)
    }

    /// Version string to store on the installation for a user selection.
    ///
    /// Selecting the version `latest` currently resolves to stores the tag
    /// itself, so the installation keeps following new releases.
    pub fn version_to_persist(&self, selected: &str) -> String {
        if self.is_latest(selected) {
            LATEST_VERSION_TAG.to_string()
        } else {
            selected.to_string()
        }
    }
}

/// The catalog API sends `null` for unset text and list fields
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_settings() -> String {
    "null".to_string()
}

/// Missing or `null` default settings are the JSON document `null`
fn settings_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(null_settings))
}

/// Build the catalog map from a list of plugins; later duplicates win.
pub fn catalog_from_plugins(plugins: Vec<Plugin>) -> PluginCatalog {
    plugins
        .into_iter()
        .map(|p| (p.plugin_id.clone(), p))
        .collect()
}
