//! Installed Plugin Settings - ViewModel
//!
//! Wraps `SettingsEditorState` for the view. The state (and with it the
//! pending settings buffer) sits in a `StoredValue`, so typing in the editor
//! does not re-render the form; only the fields the view shows are mirrored
//! into signals by `sync`.

use super::state::{SettingsEditorState, SettingsError};
use crate::domain::a001_plugin_installation::use_plugins::{use_plugins, UsePlugins};
use crate::shared::error::format_error;
use crate::shared::json_editor::{EditorChange, JsonEditorHandle};
use crate::shared::select_menu::SelectMenuItem;
use contracts::domain::a001_plugin_installation::aggregate::{
    PluginInstallation, PluginInstallationId, ResourceId,
};
use contracts::domain::a002_plugin_catalog::aggregate::{Plugin, PluginVersion};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct InstalledPluginSettingsVm {
    pub plugins: UsePlugins,
    pub editor: JsonEditorHandle,
    state: StoredValue<SettingsEditorState>,

    /// Catalog entry of the installed plugin
    pub plugin: Memo<Option<Plugin>>,

    // Mirrors of `state`
    pub selected_version: RwSignal<Option<String>>,
    pub can_save: RwSignal<bool>,
    /// Editing is locked while this is set
    pub saving: RwSignal<bool>,

    /// Failure raised before a request was sent
    pub local_error: RwSignal<Option<String>>,
}

impl InstalledPluginSettingsVm {
    pub fn new(resource_id: ResourceId, installation_id: PluginInstallationId) -> Self {
        let plugins = use_plugins(resource_id, installation_id);
        let plugin = Memo::new(move |_| {
            let plugin_id = plugins
                .plugin_installation
                .with(|i| i.as_ref().map(|i| i.plugin_id.clone()))?;
            plugins
                .plugin_catalog
                .with(|catalog| catalog.get(&plugin_id).cloned())
        });

        Self {
            plugins,
            editor: JsonEditorHandle::new(),
            state: StoredValue::new(SettingsEditorState::new()),
            plugin,
            selected_version: RwSignal::new(None),
            can_save: RwSignal::new(false),
            saving: RwSignal::new(false),
            local_error: RwSignal::new(None),
        }
    }

    /// Copy the rendered fields of `state` into their signals
    fn sync(&self) {
        let (selected, can_save, saving) = self.state.with_value(|s| {
            (
                s.selected_version().map(str::to_string),
                s.can_save(),
                s.is_saving(),
            )
        });
        if self.selected_version.get_untracked() != selected {
            self.selected_version.set(selected);
        }
        if self.can_save.get_untracked() != can_save {
            self.can_save.set(can_save);
        }
        if self.saving.get_untracked() != saving {
            self.saving.set(saving);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.plugins.loading_plugin_installation.get()
    }

    pub fn init_from_installation(&self, installation: &PluginInstallation) {
        self.state
            .update_value(|s| s.load_installation(installation));
        self.editor.set_default(
            serde_json::to_string_pretty(&installation.settings).unwrap_or_default(),
        );
        self.sync();
    }

    pub fn on_editor_change(&self, text: String, change: EditorChange) {
        let mut valid = false;
        self.state.update_value(|s| valid = s.edit_settings(&text));
        if !valid {
            log::debug!(
                "Settings edit #{} is not valid JSON ({} chars)",
                change.version_id,
                change.new_len
            );
        }
        self.sync();
    }

    pub fn select_version(&self, version: PluginVersion) {
        log::debug!("Selected plugin version {}", version.version);
        self.state.update_value(|s| s.select_version(&version));
        self.editor.show(version.settings);
        self.sync();
    }

    pub fn reset(&self) {
        let mut token = String::new();
        self.state.update_value(|s| token = s.reset());
        self.editor.reset(token);
        self.sync();
    }

    pub fn menu_title(&self) -> String {
        self.selected_version.track();
        self.plugin
            .with(|p| p.as_ref().map(|p| self.state.with_value(|s| s.menu_title(p))))
            .unwrap_or_default()
    }

    pub fn version_items(&self) -> Vec<SelectMenuItem<PluginVersion>> {
        self.selected_version.track();
        self.plugin
            .with(|p| p.as_ref().map(|p| self.state.with_value(|s| s.version_items(p))))
            .unwrap_or_default()
    }

    pub fn notification_open(&self) -> bool {
        self.local_error.with(Option::is_some) || self.plugins.update_error.with(Option::is_some)
    }

    pub fn notification_message(&self) -> String {
        if let Some(message) = self.local_error.get() {
            return message;
        }
        self.plugins
            .update_error
            .with(|e| format_error(e.as_ref()))
    }

    /// Send the pending settings; failures end up in the notification.
    pub fn save(&self) {
        let installation = self.plugins.plugin_installation.get_untracked();
        let plugin = self.plugin.get_untracked();
        let (Some(installation), Some(plugin)) = (installation, plugin) else {
            return;
        };

        let mut outcome: Result<_, SettingsError> = Err(SettingsError::NoPendingSettings);
        self.state
            .update_value(|s| outcome = s.begin_save(&installation, &plugin));
        let args = match outcome {
            Ok(args) => args,
            Err(e) => {
                log::error!("Cannot save plugin installation {}: {}", installation.id, e);
                self.local_error.set(Some(e.to_string()));
                return;
            }
        };
        self.local_error.set(None);
        self.sync();

        let vm = *self;
        spawn_local(async move {
            let result = vm.plugins.update_plugin_installation(args).await;
            vm.state.update_value(|s| s.finish_save());
            match result {
                Ok(saved) => log::debug!(
                    "Saved plugin installation {} at version {}",
                    saved.id,
                    saved.version
                ),
                Err(e) => log::error!(
                    "Failed to update plugin installation {}: {}",
                    installation.id,
                    e
                ),
            }
            vm.sync();
        });
    }
}
