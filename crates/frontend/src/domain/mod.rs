pub mod a001_plugin_installation;
