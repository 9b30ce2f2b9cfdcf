use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::json_file;

const CONFIG_FILE_NAME: &str = "config.json";
const DISABLE_ANIMATIONS_ENV: &str = "SHELF_DISABLE_ANIMATIONS";

/// Errors emitted while reading the config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

/// User-facing application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ShelfConfig {
    /// When `false`, springs jump straight to their targets.
    pub(crate) animations_enabled: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            animations_enabled: true,
        }
    }
}

impl ShelfConfig {
    /// Load the config file and apply environment overrides. Never fails:
    /// problems are logged and defaults are used instead.
    pub(crate) fn load() -> Self {
        let config = match load_from_path(&config_path()) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("config load failed, using defaults: {err}");
                Self::default()
            },
        };

        config.with_env_overrides(std::env::var(DISABLE_ANIMATIONS_ENV).ok())
    }

    fn with_env_overrides(
        mut self,
        disable_animations: Option<String>,
    ) -> Self {
        let disabled = disable_animations
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if disabled {
            self.animations_enabled = false;
        }
        self
    }
}

fn load_from_path(path: &Path) -> Result<Option<ShelfConfig>, ConfigError> {
    let Some(data) = json_file::read_if_exists(path)? else {
        return Ok(None);
    };

    Ok(Some(serde_json::from_str(&data)?))
}

fn config_path() -> PathBuf {
    json_file::config_dir().join(CONFIG_FILE_NAME)
}
