//! Fixture file output.
//!
//! [`FixtureWriter`] owns the header/body layout; [`write_fixture`] puts it
//! on disk through a temp file in the destination directory, so a failed
//! run never leaves a truncated fixture behind.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::error::{FixtureError, Result};
use crate::fixtures::{FixtureKind, POINTS_PER_TRIANGLE};
use crate::geometry::Triple;
use crate::sampler::Sampler;

/// Counts reported after a fixture is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    /// Value written on the header line
    pub declared_count: u64,
    /// Number of triples written after the header
    pub body_lines: u64,
}

impl FixtureSummary {
    /// Header and body agree: three body lines per declared triangle
    pub fn is_consistent(&self) -> bool {
        self.declared_count * POINTS_PER_TRIANGLE == self.body_lines
    }
}

/// Writes the count header followed by one triple per line
pub struct FixtureWriter<W: Write> {
    inner: W,
    declared_count: u64,
    body_lines: u64,
}

impl<W: Write> FixtureWriter<W> {
    /// Start a fixture by writing its header line
    pub fn new(mut inner: W, declared_count: u64) -> io::Result<Self> {
        writeln!(inner, "{declared_count}")?;
        Ok(Self {
            inner,
            declared_count,
            body_lines: 0,
        })
    }

    pub fn push(&mut self, triple: &Triple) -> io::Result<()> {
        writeln!(self.inner, "{triple}")?;
        self.body_lines += 1;
        Ok(())
    }

    /// Emit the same triple `times` times in a row
    pub fn repeat(&mut self, triple: &Triple, times: usize) -> io::Result<()> {
        for _ in 0..times {
            self.push(triple)?;
        }
        Ok(())
    }

    pub fn body_lines(&self) -> u64 {
        self.body_lines
    }

    /// Flush and hand back the sink together with the final counts
    pub fn finish(mut self) -> io::Result<(W, FixtureSummary)> {
        self.inner.flush()?;
        let summary = FixtureSummary {
            declared_count: self.declared_count,
            body_lines: self.body_lines,
        };
        Ok((self.inner, summary))
    }
}

/// Render a fixture into memory
pub fn render<S: Sampler + ?Sized>(
    kind: FixtureKind,
    sampler: &mut S,
) -> io::Result<(Vec<u8>, FixtureSummary)> {
    let mut writer = FixtureWriter::new(Vec::new(), kind.declared_count())?;
    kind.emit(sampler, &mut writer)?;
    writer.finish()
}

/// Generate `kind` and atomically replace the file at `path` with it.
///
/// The parent directory is created if needed. Any I/O failure is returned
/// with the offending path attached; the destination is left untouched.
///
/// A replaced file keeps its permissions. A new file gets the usual
/// umask-filtered mode, as if it had been created with `File::create`.
pub fn write_fixture<S: Sampler + ?Sized>(
    path: &Path,
    kind: FixtureKind,
    sampler: &mut S,
) -> Result<FixtureSummary> {
    let dir = parent_dir(path);
    fs::create_dir_all(&dir).map_err(|e| FixtureError::io(&dir, e))?;

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());
    let temp = create_temp(&dir).map_err(|e| FixtureError::io(&dir, e))?;
    debug!(kind = %kind, temp = %temp.path().display(), "Writing fixture to temp file");

    let mut writer = FixtureWriter::new(BufWriter::new(temp), kind.declared_count())
        .map_err(|e| FixtureError::io(path, e))?;
    kind.emit(sampler, &mut writer).map_err(|e| FixtureError::io(path, e))?;
    let (buffered, summary) = writer.finish().map_err(|e| FixtureError::io(path, e))?;

    let temp = buffered
        .into_inner()
        .map_err(|e| FixtureError::io(path, e.into_error()))?;
    if let Some(permissions) = existing {
        fs::set_permissions(temp.path(), permissions).map_err(|e| FixtureError::io(path, e))?;
    }
    temp.persist(path).map_err(|e| FixtureError::io(path, e.error))?;

    info!(
        kind = %kind,
        path = %path.display(),
        declared = summary.declared_count,
        lines = summary.body_lines,
        "Fixture written"
    );
    Ok(summary)
}

/// Temp file next to the destination. On Unix it is opened with mode 0666,
/// which the process umask then filters.
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".trifix-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
