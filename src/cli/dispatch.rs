use anyhow::Result;
use clap::CommandFactory;
use std::io;
use std::str::FromStr;
use trifix::commands::{generate, list, verify};
use trifix::completions::{generate_completions, Shell};
use trifix::config::Settings;
use trifix::FixtureKind;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli, settings: &Settings) -> Result<()> {
    let options = settings.resolve(cli.seed, cli.out_dir);

    match cli.command {
        Commands::BigTriangle { output } => {
            generate::execute(FixtureKind::BigTriangle, output, &options)
        }
        Commands::ParallelPlanes { output } => {
            generate::execute(FixtureKind::ParallelPlanes, output, &options)
        }
        Commands::SegmentsOnPlane { output } => {
            generate::execute(FixtureKind::SegmentsOnPlane, output, &options)
        }
        Commands::SegmentsOnLine { output } => {
            generate::execute(FixtureKind::SegmentsOnLine, output, &options)
        }
        Commands::CollinearEdge { output } => {
            generate::execute(FixtureKind::CollinearEdge, output, &options)
        }
        Commands::All => generate::execute_all(&options),
        Commands::List => list::execute(),
        Commands::Verify { file, kind } => verify::execute(&file, kind),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut io::stdout());
            Ok(())
        }
    }
}
