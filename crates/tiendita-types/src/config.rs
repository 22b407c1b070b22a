//! Service configuration, deserialized from `config.toml`.

use serde::{Deserialize, Serialize};

/// Runtime configuration for the chat service.
///
/// Every field has a default so a partial (or absent) config file still
/// yields a working service; CLI flags override file values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the store catalog JSON, reloaded on every chat turn.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Model identifier passed to the generation API.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sessions idle longer than this are evicted.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// How often the background sweeper purges expired sessions.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog_path() -> String {
    "store_data.json".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_session_ttl_secs() -> u64 {
    1800
}

fn default_sweep_interval_secs() -> u64 {
    300
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: default_catalog_path(),
            model: default_model(),
            session_ttl_secs: default_session_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}
