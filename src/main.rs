mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use trifix::config::Settings;
use trifix::logging::init_tracing;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    init_tracing(settings.log_level());
    debug!(?settings, "Settings loaded");

    dispatch(cli, &settings)
}
