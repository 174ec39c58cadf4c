use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while writing or reading fixture files
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Bad triangles amount: expected a non-negative integer header, found {found:?}")]
    Header { found: String },

    #[error("Bad coordinates on line {line}: {content:?}")]
    Coordinates { line: usize, content: String },

    #[error(
        "Unknown fixture kind: {0}. Use one of: big-triangle, parallel-planes, \
         segments-on-plane, segments-on-line, collinear-edge"
    )]
    UnknownKind(String),
}

impl FixtureError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
