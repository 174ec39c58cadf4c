use anyhow::Result;
use colored::Colorize;

use crate::fixtures::FixtureKind;

/// Print every fixture kind with its file and counts
pub fn execute() -> Result<()> {
    println!("{}", "Fixtures:".bold());
    for kind in FixtureKind::ALL {
        println!(
            "  {:<18} {:<7} {:>6} triangles  {}",
            kind.name().cyan(),
            kind.file_name(),
            kind.declared_count(),
            kind.description().dimmed()
        );
    }
    Ok(())
}
