//! Command line definition and dispatch.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::{default_config_path, effective_rules_dir, env_rules_dir, load_config};
use crate::destination::Target;
use crate::error::CliError;
use crate::file_ops::GenerateOptions;
use crate::generate::Selection;
use crate::listing::{list_rule_files, print_listing};

/// CLI tool for managing AI editor rule files
#[derive(Parser, Debug)]
#[command(name = "airules", version)]
#[command(about = "CLI tool for managing AI editor rule files", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, global = true, env = "AIRULES_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a rules directory
    Setup(SetupArgs),
    /// List rule files and their headings
    List(ListArgs),
    /// Generate rule files from the registered directory
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Directory containing rule files
    pub rules_dir: PathBuf,

    /// Overwrite existing settings
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of an outline
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project directory to write into (defaults to the current directory)
    pub dest_dir: Option<PathBuf>,

    /// File or section to copy: `<file>` or `<file>#<heading>`; repeatable
    #[arg(short, long = "select", value_name = "SELECTION")]
    pub selections: Vec<Selection>,

    /// Directory layout to use when no standard rule directory exists
    #[arg(short, long, value_enum)]
    pub target: Option<Target>,

    /// Show what would be done without copying files
    #[arg(short, long)]
    pub dry_run: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Log level implied by `-v` and `-q`.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    fn rules_dir(&self) -> Result<PathBuf> {
        let config = load_config(&self.config_path())?;
        effective_rules_dir(env_rules_dir(), config.as_ref())
            .ok_or_else(|| CliError::RulesDirNotConfigured.into())
    }
}

/// Executes the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Setup(args) => {
            crate::setup::run(&args.rules_dir, args.force, &cli.config_path())?;
        }
        Command::List(args) => {
            let rules_dir = cli.rules_dir()?;
            if !rules_dir.is_dir() {
                return Err(CliError::MissingDirectory(rules_dir).into());
            }
            let files = list_rule_files(&rules_dir)?;
            print_listing(&files, args.json)?;
        }
        Command::Generate(args) => {
            let rules_dir = cli.rules_dir()?;
            let dest_base = match &args.dest_dir {
                Some(dir) => dir.clone(),
                None => env::current_dir().context("Failed to read the current directory")?,
            };
            let options = GenerateOptions {
                dry_run: args.dry_run,
                force: args.force,
            };
            crate::generate::run(&rules_dir, &dest_base, args.target, &args.selections, options)?;
        }
    }
    Ok(())
}
