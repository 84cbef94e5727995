//! GraphQL calls for plugin installations and the plugin catalog

use crate::shared::config::{graphql_url, plugin_api_url};
use crate::shared::error::ApiError;
use crate::shared::graphql::graphql_request;
use contracts::domain::a001_plugin_installation::aggregate::{
    PluginInstallation, PluginInstallationId,
};
use contracts::domain::a001_plugin_installation::update::UpdatePluginInstallationArgs;
use contracts::domain::a002_plugin_catalog::aggregate::{
    catalog_from_plugins, Plugin, PluginCatalog,
};
use serde::Deserialize;
use serde_json::json;

const GET_PLUGIN_INSTALLATION: &str = r#"
query getPluginInstallation($pluginInstallationId: String!) {
  PluginInstallation(where: { id: $pluginInstallationId }) {
    id
    displayName
    pluginId
    enabled
    version
    settings
  }
}
"#;

const UPDATE_PLUGIN_INSTALLATION: &str = r#"
mutation updatePluginInstallation(
  $data: PluginInstallationUpdateInput!
  $where: WhereUniqueInput!
) {
  updatePluginInstallation(data: $data, where: $where) {
    id
    displayName
    pluginId
    enabled
    version
    settings
  }
}
"#;

const GET_PLUGINS: &str = r#"
query getPlugins {
  plugins(where: { deprecated: { equals: null } }) {
    id
    pluginId
    name
    description
    github
    npm
    icon
    website
    taggedVersions
    versions {
      id
      pluginId
      isLatest
      version
      settings
    }
  }
}
"#;

#[derive(Deserialize)]
struct PluginInstallationData {
    #[serde(rename = "PluginInstallation")]
    plugin_installation: Option<PluginInstallation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePluginInstallationData {
    update_plugin_installation: PluginInstallation,
}

#[derive(Deserialize)]
struct PluginsData {
    plugins: Vec<Plugin>,
}

/// Fetch one installation; `None` when the server does not know the id
pub async fn fetch_plugin_installation(
    id: &PluginInstallationId,
) -> Result<Option<PluginInstallation>, ApiError> {
    let data: PluginInstallationData = graphql_request(
        &graphql_url(),
        GET_PLUGIN_INSTALLATION,
        json!({ "pluginInstallationId": id }),
    )
    .await?;
    Ok(data.plugin_installation)
}

pub async fn update_plugin_installation(
    args: &UpdatePluginInstallationArgs,
) -> Result<PluginInstallation, ApiError> {
    let data: UpdatePluginInstallationData =
        graphql_request(&graphql_url(), UPDATE_PLUGIN_INSTALLATION, args).await?;
    Ok(data.update_plugin_installation)
}

/// Fetch the catalog from the plugin API, keyed by plugin id
pub async fn fetch_plugin_catalog() -> Result<PluginCatalog, ApiError> {
    let data: PluginsData = graphql_request(&plugin_api_url(), GET_PLUGINS, json!({})).await?;
    Ok(catalog_from_plugins(data.plugins))
}
