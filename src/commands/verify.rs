//! `trifix verify <file>`: parse a fixture and check its invariants.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::debug;

use crate::fixtures::FixtureKind;
use crate::fs::reader::read_fixture;
use crate::verify::{infer_kind, verify, VerifyReport};

/// Violations printed before the rest are summarised
const MAX_REPORTED: usize = 20;

pub fn execute(path: &Path, kind: Option<FixtureKind>) -> Result<()> {
    let report = check(path, kind)?;
    print_report(path, &report);

    if !report.is_ok() {
        bail!("{} failed verification", path.display());
    }
    Ok(())
}

/// Read `path` and verify it, inferring the kind from the file name when not given
pub fn check(path: &Path, kind: Option<FixtureKind>) -> Result<VerifyReport> {
    let kind = kind.or_else(|| infer_kind(path));
    debug!(path = %path.display(), kind = ?kind, "Verifying fixture");

    let parsed =
        read_fixture(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(verify(&parsed, kind))
}

fn print_report(path: &Path, report: &VerifyReport) {
    let kind = report
        .kind
        .map(|k| k.to_string())
        .unwrap_or_else(|| "unknown kind".to_string());
    println!("{} ({kind})", path.display().to_string().cyan());

    let count_mark = if report.count_matches() {
        "✓".green()
    } else {
        "✗".red()
    };
    println!(
        "  {count_mark} header declares {} triangles, body has {} lines (expected {})",
        report.declared_count,
        report.body_lines,
        report.expected_lines()
    );

    if report.kind.is_none() {
        println!("  {} invariants not checked", "→".dimmed());
    } else if report.violations.is_empty() {
        println!("  {} all triangles keep their invariants", "✓".green());
    } else {
        for violation in report.violations.iter().take(MAX_REPORTED) {
            println!(
                "  {} line {}: {}",
                "✗".red(),
                violation.line,
                violation.message
            );
        }
        let rest = report.violations.len().saturating_sub(MAX_REPORTED);
        if rest > 0 {
            println!("  {} {rest} more", "…".dimmed());
        }
    }
}
