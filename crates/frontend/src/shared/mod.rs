pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod graphql;
pub mod icons;
pub mod json_editor;
pub mod json_utils;
pub mod select_menu;
