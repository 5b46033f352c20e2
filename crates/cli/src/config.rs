//! Configuration file and rules directory resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured rules directory.
pub const RULES_DIR_ENV: &str = "AIRULES_DIR";

/// Contents of `~/.config/airules/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirulesConfig {
    /// Directory containing the rule files.
    pub rules_dir: PathBuf,
}

/// `<home>/.config/airules/config.json`, falling back to the current directory
/// when no home directory is known.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("airules")
        .join("config.json")
}

/// Loads the config file; `Ok(None)` when it does not exist.
pub fn load_config(path: &Path) -> Result<Option<AirulesConfig>> {
    if !path.exists() {
        tracing::debug!("No config file at {}", path.display());
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(Some(config))
}

/// Writes the config file as pretty-printed JSON, creating parent directories.
pub fn save_config(config: &AirulesConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

/// Rules directory from `AIRULES_DIR`, ignoring an empty value.
pub fn env_rules_dir() -> Option<PathBuf> {
    env::var_os(RULES_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Environment value first, then the config file.
pub fn effective_rules_dir(
    env_dir: Option<PathBuf>,
    config: Option<&AirulesConfig>,
) -> Option<PathBuf> {
    env_dir.or_else(|| {
        config
            .map(|config| config.rules_dir.clone())
            .filter(|dir| !dir.as_os_str().is_empty())
    })
}
