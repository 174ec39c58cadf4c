//! Structural checks for parsed fixtures.
//!
//! A fixture is sound when its body holds three lines per declared
//! triangle and, if its kind is known, every triangle keeps the invariant
//! that kind was generated for.

use std::path::Path;

use crate::fixtures::{FixtureKind, POINTS_PER_TRIANGLE};
use crate::fs::reader::ParsedFixture;
use crate::geometry::Triple;

/// A broken invariant, located by file line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 1-based line in the file (the header is line 1)
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub kind: Option<FixtureKind>,
    pub declared_count: u64,
    pub body_lines: u64,
    pub violations: Vec<Violation>,
}

impl VerifyReport {
    pub fn expected_lines(&self) -> u64 {
        self.declared_count * POINTS_PER_TRIANGLE
    }

    pub fn count_matches(&self) -> bool {
        self.body_lines == self.expected_lines()
    }

    pub fn is_ok(&self) -> bool {
        self.count_matches() && self.violations.is_empty()
    }
}

/// Guess the fixture kind from a path's file name
pub fn infer_kind(path: &Path) -> Option<FixtureKind> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(FixtureKind::from_file_name)
}

/// Check `parsed` against its header and, when `kind` is given, its invariants
pub fn verify(parsed: &ParsedFixture, kind: Option<FixtureKind>) -> VerifyReport {
    let mut violations = Vec::new();

    if let Some(kind) = kind {
        if parsed.declared_count != kind.declared_count() {
            violations.push(Violation {
                line: 1,
                message: format!(
                    "{kind} declares {} triangles, found {}",
                    kind.declared_count(),
                    parsed.declared_count
                ),
            });
        }

        for (index, chunk) in parsed.triples.chunks_exact(3).enumerate() {
            let triangle: [Triple; 3] = [chunk[0], chunk[1], chunk[2]];
            if let Some(message) = kind.check_triangle(index, &triangle) {
                violations.push(Violation {
                    line: index * 3 + 2,
                    message,
                });
            }
        }
    }

    VerifyReport {
        kind,
        declared_count: parsed.declared_count,
        body_lines: parsed.triples.len() as u64,
        violations,
    }
}
