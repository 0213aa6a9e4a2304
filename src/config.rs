//! Combined configuration file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use scriptgraph_monitoring::MonitoringConfig;
use scriptgraph_names::OverlayConfig;

/// Top-level configuration, one section per concern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptgraphConfig {
    #[serde(default)]
    pub logging: MonitoringConfig,

    #[serde(default)]
    pub names: OverlayConfig,
}

impl ScriptgraphConfig {
    /// Defaults overridden from the environment.
    pub fn load() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid scriptgraph configuration")
    }

    pub fn from_yaml_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Ok(Self::from_yaml_str(&text)?.with_env_overrides())
    }

    pub fn with_env_overrides(self) -> Self {
        Self {
            logging: self.logging.with_env_overrides(),
            names: self.names.with_env_overrides(),
        }
    }
}
