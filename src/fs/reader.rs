//! Parsing fixture files back into triples.
//!
//! The layout is the one the consumer reads: an integer triangle count on
//! the first line, then one `x y z` triple per line.

use std::fs;
use std::path::Path;

use crate::error::{FixtureError, Result};
use crate::geometry::{Coord, Triple};

/// A fixture read from disk or memory
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFixture {
    pub declared_count: u64,
    pub triples: Vec<Triple>,
}

/// Parse fixture text.
///
/// Line numbers in errors are 1-based and count the header line.
pub fn parse_fixture(text: &str) -> Result<ParsedFixture> {
    let mut lines = text.lines();

    let header = lines.next().unwrap_or_default().trim();
    let declared_count = header.parse::<u64>().map_err(|_| FixtureError::Header {
        found: header.to_string(),
    })?;

    let mut triples = Vec::new();
    for (i, line) in lines.enumerate() {
        let triple = parse_triple(line).ok_or_else(|| FixtureError::Coordinates {
            line: i + 2,
            content: line.to_string(),
        })?;
        triples.push(triple);
    }

    Ok(ParsedFixture {
        declared_count,
        triples,
    })
}

/// Read and parse a fixture file
pub fn read_fixture(path: &Path) -> Result<ParsedFixture> {
    let text = fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
    parse_fixture(&text)
}

fn parse_triple(line: &str) -> Option<Triple> {
    let mut fields = line.split_whitespace().map(str::parse::<Coord>);
    let x = fields.next()?.ok()?;
    let y = fields.next()?.ok()?;
    let z = fields.next()?.ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Triple::new(x, y, z))
}
