//! Installed Plugin Settings - editor state
//!
//! Plain Rust state of the settings form, independent of the reactive
//! runtime. The view model keeps one instance in a `StoredValue` and
//! mirrors the fields the view renders into signals.

use crate::shared::json_utils::is_valid_json;
use crate::shared::select_menu::SelectMenuItem;
use contracts::domain::a001_plugin_installation::aggregate::PluginInstallation;
use contracts::domain::a001_plugin_installation::update::UpdatePluginInstallationArgs;
use contracts::domain::a002_plugin_catalog::aggregate::{
    Plugin, PluginVersion, LATEST_VERSION_TAG,
};
use thiserror::Error;
use uuid::Uuid;

const RESET_TOKEN_LEN: usize = 5;

/// Label of the version the `latest` tag resolves to
pub fn latest_version_label(version: &str) -> String {
    format!("Latest ({})", version)
}

/// Short random base-36 token identifying one editor reset
pub fn generate_reset_token() -> String {
    let mut n = Uuid::new_v4().as_u128();
    (0..RESET_TOKEN_LEN)
        .map(|_| {
            let digit = (n % 36) as u32;
            n /= 36;
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Save is disabled until the settings are edited")]
    Blocked,
    #[error("A save is already in progress")]
    SaveInProgress,
    #[error("No plugin version selected")]
    NoVersionSelected,
    #[error("There are no valid settings to save")]
    NoPendingSettings,
    #[error("Settings are not valid JSON: {0}")]
    InvalidPendingSettings(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsEditorState {
    /// Version stored on the installation
    installed_version: Option<String>,
    /// Serialized settings of the installation, target of `reset`
    original_settings: Option<String>,
    selected_version: Option<String>,
    /// Invalid JSON, or a version switch not yet confirmed by an edit
    save_blocked: bool,
    saving: bool,
    /// Settings text sent on save; never holds malformed JSON typed by the user
    pending_settings: Option<String>,
}

impl SettingsEditorState {
    pub fn new() -> Self {
        Self {
            installed_version: None,
            original_settings: None,
            selected_version: None,
            save_blocked: true,
            saving: false,
            pending_settings: None,
        }
    }

    pub fn selected_version(&self) -> Option<&str> {
        self.selected_version.as_deref()
    }

    pub fn pending_settings(&self) -> Option<&str> {
        self.pending_settings.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn can_save(&self) -> bool {
        !self.save_blocked && !self.saving
    }

    /// Installation data arrived (initially or after a save).
    ///
    /// The selection is only defaulted once so a reload after saving keeps
    /// what the user picked.
    pub fn load_installation(&mut self, installation: &PluginInstallation) {
        let settings = installation.settings_text();
        self.original_settings = Some(settings.clone());
        self.pending_settings = Some(settings);
        self.installed_version = Some(installation.version.clone());
        if self.selected_version.is_none() {
            self.selected_version = Some(installation.version.clone());
        }
    }

    /// Apply one editor change; returns whether `text` is valid JSON.
    pub fn edit_settings(&mut self, text: &str) -> bool {
        let valid = is_valid_json(text);
        self.pending_settings = valid.then(|| text.to_string());
        self.save_blocked = !valid;
        valid
    }

    /// Switch to `version`, loading its default settings into the buffer.
    ///
    /// Choosing a version other than the installed one blocks save until the
    /// user edits the settings, even when the defaults are valid JSON.
    /// Defaults that are not valid JSON block save as well.
    pub fn select_version(&mut self, version: &PluginVersion) {
        self.selected_version = Some(version.version.clone());
        if self.installed_version.as_deref() != Some(version.version.as_str())
            || !is_valid_json(&version.settings)
        {
            self.save_blocked = true;
        }
        self.pending_settings = Some(version.settings.clone());
    }

    /// Restore the installation's settings; the block flag is untouched.
    /// Returns the token identifying this reset.
    pub fn reset(&mut self) -> String {
        self.pending_settings = self.original_settings.clone();
        generate_reset_token()
    }

    /// Title of the version menu
    pub fn menu_title(&self, plugin: &Plugin) -> String {
        let current = self
            .selected_version
            .as_deref()
            .or(self.installed_version.as_deref())
            .unwrap_or_default();
        match plugin.latest_version() {
            Some(latest) if current == latest || current == LATEST_VERSION_TAG => {
                latest_version_label(latest)
            }
            _ => current.to_string(),
        }
    }

    /// Entries of the version menu, in catalog order
    pub fn version_items(&self, plugin: &Plugin) -> Vec<SelectMenuItem<PluginVersion>> {
        plugin
            .versions
            .iter()
            .map(|version| {
                let label = if version.is_latest {
                    latest_version_label(&version.version)
                } else {
                    version.version.clone()
                };
                // Selection or latest label; the label test only holds for a
                // version literally named "Latest (...)".
                let selected = self.selected_version.as_deref() == Some(version.version.as_str())
                    || latest_version_label(&version.version) == version.version;
                SelectMenuItem {
                    key: version.id.clone(),
                    label,
                    selected,
                    data: version.clone(),
                }
            })
            .collect()
    }

    /// Build the update request and mark a save as in flight.
    pub fn begin_save(
        &mut self,
        installation: &PluginInstallation,
        plugin: &Plugin,
    ) -> Result<UpdatePluginInstallationArgs, SettingsError> {
        if self.saving {
            return Err(SettingsError::SaveInProgress);
        }
        if self.save_blocked {
            return Err(SettingsError::Blocked);
        }
        let selected = self
            .selected_version
            .as_deref()
            .ok_or(SettingsError::NoVersionSelected)?;
        let pending = self
            .pending_settings
            .as_deref()
            .ok_or(SettingsError::NoPendingSettings)?;
        let settings: serde_json::Value = serde_json::from_str(pending)
            .map_err(|e| SettingsError::InvalidPendingSettings(e.to_string()))?;

        let args = UpdatePluginInstallationArgs::new(
            installation.id.clone(),
            installation.enabled,
            plugin.version_to_persist(selected),
            settings,
        );
        self.saving = true;
        Ok(args)
    }

    /// The update request finished, successfully or not.
    pub fn finish_save(&mut self) {
        self.saving = false;
    }
}

impl Default for SettingsEditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_plugin_installation::aggregate::PluginInstallationId;
    use serde_json::json;
    use std::collections::HashMap;

    fn version(id: &str, v: &str, is_latest: bool, settings: &str) -> PluginVersion {
        PluginVersion {
            id: id.into(),
            plugin_id: "db-postgres".into(),
            version: v.into(),
            is_latest,
            settings: settings.into(),
        }
    }

    fn plugin() -> Plugin {
        Plugin {
            id: "p1".into(),
            plugin_id: "db-postgres".into(),
            name: "PostgreSQL".into(),
            description: "Use a PostgreSQL database".into(),
            icon: None,
            github: None,
            npm: None,
            website: None,
            versions: vec![
                version("v1", "0.9.0", false, r#"{"port":5433}"#),
                version("v2", "1.0.0", true, r#"{"port":5432}"#),
            ],
            tagged_versions: HashMap::from([("latest".to_string(), "1.0.0".to_string())]),
        }
    }

    fn installation(version: &str) -> PluginInstallation {
        PluginInstallation {
            id: PluginInstallationId::new("inst-1"),
            plugin_id: "db-postgres".into(),
            enabled: true,
            version: version.into(),
            settings: json!({ "port": 5432, "host": "db" }),
            display_name: None,
        }
    }

    fn loaded(version: &str) -> SettingsEditorState {
        let mut state = SettingsEditorState::new();
        state.load_installation(&installation(version));
        state
    }

    #[test]
    fn test_initial_state_blocks_save() {
        let state = SettingsEditorState::new();
        assert!(!state.can_save());
        assert_eq!(state.selected_version(), None);
    }

    #[test]
    fn test_load_initializes_buffer_and_selection() {
        let state = loaded("1.0.0");
        assert_eq!(state.selected_version(), Some("1.0.0"));
        let pending: serde_json::Value =
            serde_json::from_str(state.pending_settings().unwrap()).unwrap();
        assert_eq!(pending, json!({ "port": 5432, "host": "db" }));
    }

    #[test]
    fn test_reload_keeps_existing_selection() {
        let mut state = loaded("1.0.0");
        state.select_version(&version("v1", "0.9.0", false, "{}"));
        state.load_installation(&installation("latest"));
        assert_eq!(state.selected_version(), Some("0.9.0"));
    }

    #[test]
    fn test_valid_edit_enables_save() {
        let mut state = loaded("1.0.0");
        for text in ["{}", r#"{"port":1}"#, "[1,2]", "null", "\"x\""] {
            assert!(state.edit_settings(text));
            assert!(state.can_save(), "{text} should enable save");
            assert_eq!(state.pending_settings(), Some(text));
        }
    }

    #[test]
    fn test_invalid_edit_disables_save_and_drops_text() {
        let mut state = loaded("1.0.0");
        state.edit_settings("{}");
        for text in ["", "{", "{port: 1}", r#"{"a":1,}"#] {
            assert!(!state.edit_settings(text));
            assert!(!state.can_save(), "{text:?} should disable save");
            assert_eq!(state.pending_settings(), None);
        }
    }

    #[test]
    fn test_selecting_other_version_blocks_until_edit() {
        let mut state = loaded("1.0.0");
        state.edit_settings(r#"{"port":1}"#);
        assert!(state.can_save());

        state.select_version(&version("v1", "0.9.0", false, r#"{"port":5433}"#));
        assert_eq!(state.selected_version(), Some("0.9.0"));
        assert_eq!(state.pending_settings(), Some(r#"{"port":5433}"#));
        assert!(!state.can_save());

        state.edit_settings(r#"{"port":5434}"#);
        assert!(state.can_save());
    }

    #[test]
    fn test_selecting_installed_version_keeps_flag() {
        let mut state = loaded("1.0.0");
        state.edit_settings("{}");
        state.select_version(&version("v2", "1.0.0", true, r#"{"port":5432}"#));
        assert!(state.can_save());
        assert_eq!(state.pending_settings(), Some(r#"{"port":5432}"#));
    }

    #[test]
    fn test_reset_restores_original_without_touching_flag() {
        let mut state = loaded("1.0.0");
        let original = state.pending_settings().map(str::to_string);

        state.edit_settings(r#"{"port":1}"#);
        let token = state.reset();
        assert_eq!(token.len(), RESET_TOKEN_LEN);
        assert_eq!(state.pending_settings().map(str::to_string), original);
        assert!(state.can_save());

        state.edit_settings("{");
        state.reset();
        assert!(!state.can_save());
        assert_eq!(state.pending_settings().map(str::to_string), original);
    }

    #[test]
    fn test_reset_token_changes() {
        let mut state = loaded("1.0.0");
        let first = state.reset();
        let second = state.reset();
        assert!(first.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        // 36^5 values; a collision here is practically impossible
        assert_ne!(first, second);
    }

    #[test]
    fn test_menu_title_latest() {
        let state = loaded("1.0.0");
        assert_eq!(state.menu_title(&plugin()), "Latest (1.0.0)");

        let tagged = loaded("latest");
        assert_eq!(tagged.menu_title(&plugin()), "Latest (1.0.0)");
    }

    #[test]
    fn test_menu_title_pinned_version() {
        let mut state = loaded("1.0.0");
        state.select_version(&version("v1", "0.9.0", false, "{}"));
        assert_eq!(state.menu_title(&plugin()), "0.9.0");
    }

    #[test]
    fn test_menu_title_without_latest_tag() {
        let mut p = plugin();
        p.tagged_versions.clear();
        let state = loaded("latest");
        assert_eq!(state.menu_title(&p), "latest");
    }

    #[test]
    fn test_version_items_labels_and_selection() {
        let mut state = loaded("1.0.0");
        let items = state.version_items(&plugin());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "0.9.0");
        assert!(!items[0].selected);
        assert_eq!(items[1].label, "Latest (1.0.0)");
        assert!(items[1].selected);
        assert_eq!(items[1].key, "v2");

        state.select_version(&items[0].data);
        let items = state.version_items(&plugin());
        assert!(items[0].selected);
        assert!(!items[1].selected);
    }

    #[test]
    fn test_installed_tag_selects_no_entry() {
        let state = loaded("latest");
        assert!(state.version_items(&plugin()).iter().all(|i| !i.selected));
    }

    #[test]
    fn test_save_latest_persists_tag() {
        let mut state = loaded("1.0.0");
        state.edit_settings(r#"{"port":6000}"#);
        let args = state.begin_save(&installation("1.0.0"), &plugin()).unwrap();
        assert_eq!(args.data.version, "latest");
        assert_eq!(args.data.settings, json!({ "port": 6000 }));
        assert!(args.data.enabled);
        assert_eq!(args.where_.id.value(), "inst-1");
    }

    #[test]
    fn test_save_pinned_version_verbatim() {
        let mut state = loaded("1.0.0");
        state.select_version(&version("v1", "0.9.0", false, r#"{"port":5433}"#));
        assert_eq!(
            state.begin_save(&installation("1.0.0"), &plugin()),
            Err(SettingsError::Blocked)
        );

        state.edit_settings(r#"{"port":5433}"#);
        let args = state.begin_save(&installation("1.0.0"), &plugin()).unwrap();
        assert_eq!(args.data.version, "0.9.0");
    }

    #[test]
    fn test_save_keeps_tag_when_installed_on_latest() {
        let mut state = loaded("latest");
        state.edit_settings("{}");
        let args = state.begin_save(&installation("latest"), &plugin()).unwrap();
        assert_eq!(args.data.version, "latest");
    }

    #[test]
    fn test_one_save_in_flight() {
        let mut state = loaded("1.0.0");
        state.edit_settings("{}");
        state.begin_save(&installation("1.0.0"), &plugin()).unwrap();
        assert!(state.is_saving());
        assert!(!state.can_save());
        assert_eq!(
            state.begin_save(&installation("1.0.0"), &plugin()),
            Err(SettingsError::SaveInProgress)
        );
        state.finish_save();
        assert!(!state.is_saving());
        assert!(state.can_save());
    }

    #[test]
    fn test_failed_save_keeps_local_state() {
        let mut state = loaded("1.0.0");
        state.select_version(&version("v1", "0.9.0", false, "{}"));
        state.edit_settings(r#"{"port":7}"#);
        state.begin_save(&installation("1.0.0"), &plugin()).unwrap();
        state.finish_save();
        assert_eq!(state.selected_version(), Some("0.9.0"));
        assert_eq!(state.pending_settings(), Some(r#"{"port":7}"#));
        assert!(state.can_save());
    }

    #[test]
    fn test_unparseable_defaults_of_installed_version_block_save() {
        let mut state = loaded("1.0.0");
        state.edit_settings("{}");
        assert!(state.can_save());

        state.select_version(&version("v2", "1.0.0", true, ""));
        assert!(!state.can_save());
        assert_eq!(
            state.begin_save(&installation("1.0.0"), &plugin()),
            Err(SettingsError::Blocked)
        );
        assert!(!state.is_saving());
    }

    #[test]
    fn test_null_defaults_of_installed_version_save_null() {
        let mut state = loaded("1.0.0");
        state.edit_settings("{}");
        let null_defaults: PluginVersion = serde_json::from_value(json!({
            "id": "v2",
            "version": "1.0.0",
            "isLatest": true,
            "settings": null
        }))
        .unwrap();

        state.select_version(&null_defaults);
        assert!(state.can_save());
        let args = state.begin_save(&installation("1.0.0"), &plugin()).unwrap();
        assert_eq!(args.data.settings, serde_json::Value::Null);
    }
}
