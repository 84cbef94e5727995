use crate::domain::common::{parse_opaque_id, AggregateId};
use serde::{Deserialize, Serialize};

/// Id of a plugin installation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginInstallationId(pub String);

impl PluginInstallationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for PluginInstallationId {
    fn as_string(&self) -> String {
        self.0.clone()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        parse_opaque_id(s, "plugin installation id").map(Self)
    }
}

impl std::fmt::Display for PluginInstallationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Id of the resource (service) a plugin is installed on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ResourceId {
    fn as_string(&self) -> String {
        self.0.clone()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        parse_opaque_id(s, "resource id").map(Self)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plugin attached to one resource, with its own version pin and settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginInstallation {
    pub id: PluginInstallationId,

    /// Catalog key of the installed plugin
    pub plugin_id: String,

    pub enabled: bool,

    /// Concrete version string or a tag such as `latest`
    pub version: String,

    /// Arbitrary JSON settings
    #[serde(default)]
    pub settings: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl PluginInstallation {
    /// Settings serialized the way the editor shows them initially.
    pub fn settings_text(&self) -> String {
        // Value -> String serialization cannot fail
        serde_json::to_string(&self.settings).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_from_graphql_shape() {
        let raw = json!({
            "id": "inst-1",
            "pluginId": "db-postgres",
            "enabled": true,
            "version": "latest",
            "settings": { "port": 5432 },
            "displayName": "Postgres"
        });
        let installation: PluginInstallation = serde_json::from_value(raw).unwrap();
        assert_eq!(installation.id.value(), "inst-1");
        assert_eq!(installation.plugin_id, "db-postgres");
        assert_eq!(installation.version, "latest");
        assert_eq!(installation.display_name.as_deref(), Some("Postgres"));
    }

    #[test]
    fn test_missing_settings_default_to_null() {
        let raw = json!({
            "id": "inst-1",
            "pluginId": "auth-core",
            "enabled": false,
            "version": "1.0.0"
        });
        let installation: PluginInstallation = serde_json::from_value(raw).unwrap();
        assert_eq!(installation.settings_text(), "null");
    }

    #[test]
    fn test_settings_text_is_compact_json() {
        let installation = PluginInstallation {
            id: PluginInstallationId::new("inst-1"),
            plugin_id: "auth-core".into(),
            enabled: true,
            version: "1.0.0".into(),
            settings: json!({ "a": [1, 2] }),
            display_name: None,
        };
        assert_eq!(installation.settings_text(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_installation_id_rejects_blank() {
        assert!(PluginInstallationId::from_string(" ").is_err());
        assert_eq!(
            PluginInstallationId::from_string("abc").unwrap().as_string(),
            "abc"
        );
    }
}
