pub mod a001_plugin_installation;
pub mod a002_plugin_catalog;
pub mod common;
