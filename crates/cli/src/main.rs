#![forbid(unsafe_code)]

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = airules::Cli::parse();
    airules::init_logging(cli.log_level());
    airules::run(cli)
}
