//! Build-time Configuration
//!
//! The endpoint and log level are baked in when the bundle is built
//! (`TODO_API_URL`, `TODO_LOG_LEVEL`).

use log::{warn, LevelFilter};
use todo_sync::ClientConfig;

pub fn client_config() -> ClientConfig {
    resolve_client_config(option_env!("TODO_API_URL"))
}

pub fn log_level() -> LevelFilter {
    console_logger::parse_level(option_env!("TODO_LOG_LEVEL"))
}

fn resolve_client_config(endpoint: Option<&str>) -> ClientConfig {
    let Some(endpoint) = endpoint else {
        return ClientConfig::default();
    };
    ClientConfig::new(endpoint).unwrap_or_else(|e| {
        let fallback = ClientConfig::default();
        warn!("{}; falling back to {}", e, fallback.endpoint);
        fallback
    })
}
