//! Installed Plugin Settings UI Module (MVVM Standard)
//!
//! Structure:
//! - state.rs: plain editor state and save rules
//! - view_model.rs: InstalledPluginSettingsVm (StoredValue state + mirrored signals)
//! - view.rs: Main component InstalledPluginSettings

mod state;
mod view;
mod view_model;

pub use state::{latest_version_label, SettingsEditorState, SettingsError};
pub use view::InstalledPluginSettings;
pub use view_model::InstalledPluginSettingsVm;
