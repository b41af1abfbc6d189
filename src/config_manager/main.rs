use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config_manager::agent::AgentConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::utils::{parse_config_value, read_config_text, ConfigFormat};

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    /// Agent used when a chat request carries no `config`, and served to
    /// the UI as its initial configuration.
    #[serde(rename = "default_agent")]
    #[serde(default)]
    pub default_agent: AgentConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = read_config_text(path)?;
        let value = parse_config_value(&content, ConfigFormat::from_path(path))?;
        let config: Config = serde_json::from_value(value)?;
        Ok(config)
    }

    /// Files tried in order at startup.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        let mut paths: Vec<PathBuf> = std::env::var("CONFIG_PATH")
            .ok()
            .map(PathBuf::from)
            .into_iter()
            .collect();
        for name in ["conf.yaml", "conf.yml", "conf.jsonld", "conf.json"] {
            paths.push(PathBuf::from(name));
            if let Some(dir) = &exe_dir {
                paths.push(dir.join(name));
            }
        }
        paths
    }

    /// Load the first candidate that parses, or fall back to built-in
    /// defaults. Environment overrides are applied either way.
    pub fn discover(candidates: &[PathBuf]) -> Self {
        let mut config = None;
        for path in candidates {
            match Config::load(path) {
                Ok(cfg) => {
                    info!("Loaded configuration from: {}", path.display());
                    config = Some(cfg);
                    break;
                }
                Err(e) => {
                    debug!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        let mut config = config.unwrap_or_else(|| {
            warn!("No configuration file found (tried {:?}), using defaults", candidates);
            Config::default()
        });
        config.system_config.apply_env_overrides();
        config
    }
}
