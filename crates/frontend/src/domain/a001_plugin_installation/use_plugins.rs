//! Data hook: one installation plus the plugin catalog

use super::api;
use crate::shared::error::ApiError;
use contracts::domain::a001_plugin_installation::aggregate::{
    PluginInstallation, PluginInstallationId, ResourceId,
};
use contracts::domain::a001_plugin_installation::update::UpdatePluginInstallationArgs;
use contracts::domain::a002_plugin_catalog::aggregate::PluginCatalog;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct UsePlugins {
    /// `None` until loaded (or when the id is unknown)
    pub plugin_installation: RwSignal<Option<PluginInstallation>>,
    pub loading_plugin_installation: RwSignal<bool>,
    pub plugin_catalog: RwSignal<PluginCatalog>,
    /// Last error of `update_plugin_installation`; cleared on success
    pub update_error: RwSignal<Option<ApiError>>,
    /// True while an update request is in flight
    pub updating: RwSignal<bool>,
}

/// Start loading `installation_id` and the catalog; returns immediately.
pub fn use_plugins(resource_id: ResourceId, installation_id: PluginInstallationId) -> UsePlugins {
    let hook = UsePlugins {
        plugin_installation: RwSignal::new(None),
        loading_plugin_installation: RwSignal::new(true),
        plugin_catalog: RwSignal::new(PluginCatalog::new()),
        update_error: RwSignal::new(None),
        updating: RwSignal::new(false),
    };

    let plugin_installation = hook.plugin_installation;
    let loading = hook.loading_plugin_installation;
    spawn_local(async move {
        match api::fetch_plugin_installation(&installation_id).await {
            Ok(Some(installation)) => {
                log::debug!(
                    "Loaded plugin installation {} ({}@{}) of resource {}",
                    installation.id,
                    installation.plugin_id,
                    installation.version,
                    resource_id
                );
                plugin_installation.set(Some(installation));
            }
            Ok(None) => {
                log::error!(
                    "Plugin installation {} not found on resource {}",
                    installation_id,
                    resource_id
                );
            }
            Err(e) => {
                log::error!(
                    "Failed to load plugin installation {}: {}",
                    installation_id,
                    e
                );
            }
        }
        loading.set(false);
    });

    let plugin_catalog = hook.plugin_catalog;
    spawn_local(async move {
        match api::fetch_plugin_catalog().await {
            Ok(catalog) => {
                log::debug!("Loaded plugin catalog: {} plugins", catalog.len());
                plugin_catalog.set(catalog);
            }
            Err(e) => log::error!("Failed to load plugin catalog: {}", e),
        }
    });

    hook
}

impl UsePlugins {
    /// Send the update mutation.
    ///
    /// On success the returned installation replaces the loaded one; on
    /// failure the error is kept in `update_error`.
    pub async fn update_plugin_installation(
        self,
        args: UpdatePluginInstallationArgs,
    ) -> Result<PluginInstallation, ApiError> {
        self.updating.set(true);
        let result = api::update_plugin_installation(&args).await;
        match &result {
            Ok(installation) => {
                self.update_error.set(None);
                self.plugin_installation.set(Some(installation.clone()));
            }
            Err(e) => self.update_error.set(Some(e.clone())),
        }
        self.updating.set(false);
        result
    }
}
