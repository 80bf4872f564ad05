pub mod config;
pub mod config_cache;
pub mod flow_config;
