pub mod api;
pub mod ui;
pub mod use_plugins;
