//! Fixture generation commands.
//!
//! Commands:
//! - `trifix <kind> [-o PATH]` - Write one fixture
//! - `trifix all` - Write every fixture into the output directory

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::RunOptions;
use crate::fixtures::FixtureKind;
use crate::fs::writer::{write_fixture, FixtureSummary};
use crate::sampler::{RandomSampler, Sampler};

/// Generate a single fixture
pub fn execute(kind: FixtureKind, output: Option<PathBuf>, options: &RunOptions) -> Result<()> {
    let path = options.output_path(kind, output);
    let mut sampler = sampler_for(options);
    let summary = generate(kind, &path, &mut sampler)?;
    print_summary(kind, &path, &summary);
    Ok(())
}

/// Generate all five fixtures in order, sharing one random source
pub fn execute_all(options: &RunOptions) -> Result<()> {
    let mut sampler = sampler_for(options);
    for kind in FixtureKind::ALL {
        let path = options.output_path(kind, None);
        let summary = generate(kind, &path, &mut sampler)?;
        print_summary(kind, &path, &summary);
    }
    Ok(())
}

/// Write `kind` to `path`, attaching the fixture name to any failure
pub fn generate<S: Sampler + ?Sized>(
    kind: FixtureKind,
    path: &Path,
    sampler: &mut S,
) -> Result<FixtureSummary> {
    write_fixture(path, kind, sampler)
        .with_context(|| format!("Failed to generate {kind} fixture at {}", path.display()))
}

fn sampler_for(options: &RunOptions) -> RandomSampler<rand::rngs::StdRng> {
    match options.seed {
        Some(seed) => debug!(seed, "Using seeded random source"),
        None => debug!("Using OS-seeded random source"),
    }
    RandomSampler::with_seed(options.seed)
}

fn print_summary(kind: FixtureKind, path: &Path, summary: &FixtureSummary) {
    println!(
        "{} Wrote {} ({}): {} triangles, {} lines",
        "✓".green(),
        path.display().to_string().cyan(),
        kind,
        summary.declared_count,
        summary.body_lines
    );
}
