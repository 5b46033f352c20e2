//! Destination directory resolution for `airules generate`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

/// Standard AI editor rule directories, checked in order.
pub const DEST_DIRECTORIES: [&str; 2] = [".cursor/rules/", "github/prompts/"];

/// Where to write when no standard directory exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// The base directory itself.
    Current,
    /// `.cursor/rules/` under the base directory.
    Cursor,
    /// `github/prompts/` under the base directory.
    Github,
}

impl Target {
    fn path(self, base: &Path) -> PathBuf {
        match self {
            Target::Current => base.to_path_buf(),
            Target::Cursor => base.join(DEST_DIRECTORIES[0]),
            Target::Github => base.join(DEST_DIRECTORIES[1]),
        }
    }
}

/// First standard rule directory that already exists under `base`.
pub fn find_standard_dir(base: &Path) -> Option<PathBuf> {
    DEST_DIRECTORIES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.is_dir())
}

/// Resolves the output directory.
///
/// An explicit `target` wins. Otherwise an existing standard directory is
/// used, falling back to `base`. A missing directory is created unless
/// `dry_run` is set.
pub fn determine_dest_dir(base: &Path, target: Option<Target>, dry_run: bool) -> Result<PathBuf> {
    let dest = match target {
        Some(target) => target.path(base),
        None => match find_standard_dir(base) {
            Some(found) => found,
            None => {
                tracing::warn!(
                    "No standard AI rule directories found under {}; writing there directly (use --target to choose)",
                    base.display()
                );
                base.to_path_buf()
            }
        },
    };

    if !dest.exists() {
        if dry_run {
            tracing::info!("Would create directory {}", dest.display());
        } else {
            fs::create_dir_all(&dest)
                .with_context(|| format!("Failed to create directory {}", dest.display()))?;
            tracing::info!("Created directory {}", dest.display());
        }
    }

    Ok(dest)
}
