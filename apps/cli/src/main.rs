mod commands;
mod config;
mod main_lib;

use clap::Parser;
use commands::{run, Cli};
use config::Config;
use main_lib::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    tracing::debug!(
        "Tenant basis configured: {}",
        config.basis.is_some()
    );
    run(cli, &config)
}
