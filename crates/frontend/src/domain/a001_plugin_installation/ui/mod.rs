pub mod plugin_logo;
pub mod settings;
