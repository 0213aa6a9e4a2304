//! Configuration for the name overlay
//!
//! Loaded from an optional YAML file, then overridden from environment
//! variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::NamesResult;
use crate::store::CUSTOM_NAMES_TAG;

/// Name overlay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Bundled vanilla name table. No path means an empty vanilla table.
    #[serde(default)]
    pub vanilla_names_path: Option<PathBuf>,

    /// Tag of the side-channel table holding custom names
    #[serde(default = "default_custom_table_tag")]
    pub custom_table_tag: String,
}

fn default_custom_table_tag() -> String {
    CUSTOM_NAMES_TAG.to_string()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            vanilla_names_path: None,
            custom_table_tag: default_custom_table_tag(),
        }
    }
}

impl OverlayConfig {
    /// Defaults overridden from the environment.
    pub fn load() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn from_yaml_str(yaml: &str) -> NamesResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a YAML file, then apply environment overrides.
    pub fn from_yaml_file(path: &Path) -> NamesResult<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?.with_env_overrides();
        info!(path = %path.display(), "Loaded name overlay configuration");
        Ok(config)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = env::var("SCRIPTGRAPH_VANILLA_NAMES") {
            if path.is_empty() {
                self.vanilla_names_path = None;
            } else {
                self.vanilla_names_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(tag) = env::var("SCRIPTGRAPH_CUSTOM_TAG") {
            if tag.is_empty() || tag.contains(['/', '\\']) {
                warn!("Invalid SCRIPTGRAPH_CUSTOM_TAG value: {:?}", tag);
            } else {
                self.custom_table_tag = tag;
            }
        }

        self
    }
}
