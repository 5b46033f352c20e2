//! `airules setup`: register the rules directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{AirulesConfig, load_config, save_config};
use crate::error::CliError;

/// Checks that `rules_dir` exists and is a directory.
///
/// A directory without `.git` is accepted with a warning.
pub fn validate_rules_dir(rules_dir: &Path) -> Result<(), CliError> {
    if !rules_dir.exists() {
        return Err(CliError::MissingDirectory(rules_dir.to_path_buf()));
    }
    if !rules_dir.is_dir() {
        return Err(CliError::NotADirectory(rules_dir.to_path_buf()));
    }
    if !rules_dir.join(".git").exists() {
        tracing::warn!("{} is not git managed", rules_dir.display());
    }
    Ok(())
}

/// Validates and stores `rules_dir`, returning the absolute path saved.
pub fn run(rules_dir: &Path, force: bool, config_path: &Path) -> Result<PathBuf> {
    validate_rules_dir(rules_dir)?;

    if let Some(existing) = load_config(config_path)?
        && !force
    {
        return Err(CliError::ConfigExists {
            rules_dir: existing.rules_dir,
        }
        .into());
    }

    let rules_dir = fs::canonicalize(rules_dir)
        .with_context(|| format!("Failed to resolve {}", rules_dir.display()))?;
    save_config(
        &AirulesConfig {
            rules_dir: rules_dir.clone(),
        },
        config_path,
    )?;

    println!(
        "Success: Rules directory registered at {}",
        rules_dir.display()
    );
    println!("You can now use 'airules generate' to create rule files.");
    Ok(rules_dir)
}
