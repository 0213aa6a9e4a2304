//! Logging setup shared by the scriptgraph crates.

use serde::{Deserialize, Serialize};
use std::env;

pub mod logging;

pub use logging::{init_logging, LogExt};

/// Configuration for initializing logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Service name attached to the startup log line
    pub service_name: String,
    /// Log level filter (e.g., "info,scriptgraph_names=debug")
    pub log_filter: String,
    /// JSON lines instead of pretty output
    pub enable_json_logging: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            service_name: "scriptgraph".to_string(),
            log_filter: "info".to_string(),
            enable_json_logging: false,
        }
    }
}

impl MonitoringConfig {
    /// Defaults overridden from `SCRIPTGRAPH_LOG_FILTER` and `SCRIPTGRAPH_LOG_JSON`.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(filter) = env::var("SCRIPTGRAPH_LOG_FILTER") {
            if !filter.is_empty() {
                self.log_filter = filter;
            }
        }
        if let Ok(json) = env::var("SCRIPTGRAPH_LOG_JSON") {
            self.enable_json_logging = parse_flag(&json).unwrap_or(self.enable_json_logging);
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
