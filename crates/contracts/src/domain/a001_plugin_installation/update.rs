use super::aggregate::PluginInstallationId;
use serde::{Deserialize, Serialize};

/// Fields written by `updatePluginInstallation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInstallationUpdateInput {
    pub enabled: bool,
    pub version: String,
    pub settings: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereUniqueInput {
    pub id: PluginInstallationId,
}

/// Variables of the update mutation: `{ data: {...}, where: { id } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePluginInstallationArgs {
    pub data: PluginInstallationUpdateInput,
    #[serde(rename = "where")]
    pub where_: WhereUniqueInput,
}

impl UpdatePluginInstallationArgs {
    pub fn new(
        id: PluginInstallationId,
        enabled: bool,
        version: impl Into<String>,
        settings: serde_json::Value,
    ) -> Self {
        Self {
            data: PluginInstallationUpdateInput {
                enabled,
                version: version.into(),
                settings,
            },
            where_: WhereUniqueInput { id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_where_key_literally() {
        let args = UpdatePluginInstallationArgs::new(
            PluginInstallationId::new("inst-1"),
            true,
            "latest",
            json!({ "port": 5432 }),
        );
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "data": { "enabled": true, "version": "latest", "settings": { "port": 5432 } },
                "where": { "id": "inst-1" }
            })
        );
    }
}
