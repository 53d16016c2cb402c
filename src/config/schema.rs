//! Configuration schema for pluginlock
//!
//! Configuration is stored at `~/.config/pluginlock/config.toml`

use crate::lock::LOCK_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Plugin cache settings
    pub plugins: PluginsConfig,
}

impl Config {
    /// Resolve the plugin cache directory
    pub fn plugin_dir(&self) -> PathBuf {
        self.plugins
            .dir
            .clone()
            .unwrap_or_else(PluginsConfig::default_dir)
    }

    /// Resolve the lock manifest path
    pub fn manifest_path(&self) -> PathBuf {
        self.plugin_dir().join(&self.plugins.lock_file)
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Plugin cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Plugin cache directory (platform data dir if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Manifest file name inside the plugin cache directory
    pub lock_file: String,
}

impl PluginsConfig {
    /// Check that `lock_file` names a single file inside the plugin directory
    pub fn validate(&self) -> Result<(), String> {
        let mut components = Path::new(&self.lock_file).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == self.lock_file.as_str() => Ok(()),
            _ => Err(format!(
                "plugins.lock_file must be a plain file name, got {:?}",
                self.lock_file
            )),
        }
    }

    /// Platform default plugin cache directory
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pluginlock")
            .join("plugins")
    }
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            lock_file: LOCK_FILE_NAME.to_string(),
        }
    }
}
