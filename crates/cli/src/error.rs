use std::path::PathBuf;

use thiserror::Error;

/// User-facing failures of the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither `AIRULES_DIR` nor the config file names a rules directory.
    #[error("No rules directory configured. Please run 'airules setup <rulesDir>' first")]
    RulesDirNotConfigured,
    /// A path that must exist does not.
    #[error("Directory {0} does not exist")]
    MissingDirectory(PathBuf),
    /// A path that must be a directory is something else.
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    /// `setup` would overwrite an existing config.
    #[error("Config already exists. Use --force to overwrite. Current rules directory: {}", .rules_dir.display())]
    ConfigExists {
        /// Rules directory in the existing config.
        rules_dir: PathBuf,
    },
    /// The rules directory has no markdown rule files.
    #[error("No rule files found in the rules directory {0}")]
    NoRuleFiles(PathBuf),
    /// A selection names a file that is not in the listing.
    #[error("Unknown rule file {0:?}; run 'airules list' to see available files")]
    UnknownFile(String),
    /// A bare file name matches several listed files.
    #[error("Rule file name {name:?} is ambiguous; use one of: {}", .candidates.join(", "))]
    AmbiguousFile {
        /// The file name given.
        name: String,
        /// Display names that share it.
        candidates: Vec<String>,
    },
}
