//! airules: copy whole rule files or single markdown sections from a rules
//! repository into a project's AI editor rule directories.

pub mod cli;
pub mod config;
pub mod destination;
pub mod error;
pub mod file_ops;
pub mod generate;
pub mod listing;
pub mod setup;

pub use cli::{Cli, run};
pub use error::CliError;

/// Installs the stderr log subscriber; core `log` records are forwarded too.
pub fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
