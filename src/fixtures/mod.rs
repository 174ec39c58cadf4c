//! The five fixture kinds and their emitters.
//!
//! Each fixture declares a number of triangles on its header line and then
//! writes three body lines per triangle. The consumer reads the header as a
//! triangle count followed by nine coordinates per triangle.

pub mod big_triangle;
pub mod collinear_edge;
pub mod parallel_planes;
pub mod segments;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::FixtureError;
use crate::fs::writer::FixtureWriter;
use crate::geometry::Triple;
use crate::sampler::Sampler;

/// Body lines per declared triangle
pub const POINTS_PER_TRIANGLE: u64 = 3;

/// One generated fixture file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    /// Points on x+y+z=0, mostly triplicated
    BigTriangle,
    /// Triangles on ten parallel planes x+y+z=a
    ParallelPlanes,
    /// Zero-length and short segments on x+y+z=0
    SegmentsOnPlane,
    /// Degenerate segments on the line x=y=z
    SegmentsOnLine,
    /// Triangles with two vertices on the line x=y=z
    CollinearEdge,
}

impl FixtureKind {
    pub const ALL: [FixtureKind; 5] = [
        FixtureKind::BigTriangle,
        FixtureKind::ParallelPlanes,
        FixtureKind::SegmentsOnPlane,
        FixtureKind::SegmentsOnLine,
        FixtureKind::CollinearEdge,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            FixtureKind::BigTriangle => "big-triangle",
            FixtureKind::ParallelPlanes => "parallel-planes",
            FixtureKind::SegmentsOnPlane => "segments-on-plane",
            FixtureKind::SegmentsOnLine => "segments-on-line",
            FixtureKind::CollinearEdge => "collinear-edge",
        }
    }

    /// Default output file name
    pub fn file_name(self) -> &'static str {
        match self {
            FixtureKind::BigTriangle => "13.dat",
            FixtureKind::ParallelPlanes => "27.dat",
            FixtureKind::SegmentsOnPlane => "15.dat",
            FixtureKind::SegmentsOnLine => "16.dat",
            FixtureKind::CollinearEdge => "17.dat",
        }
    }

    /// Triangle count written on the header line
    pub fn declared_count(self) -> u64 {
        match self {
            FixtureKind::BigTriangle => big_triangle::DECLARED_COUNT,
            FixtureKind::ParallelPlanes => parallel_planes::DECLARED_COUNT,
            FixtureKind::SegmentsOnPlane => segments::ON_PLANE_DECLARED_COUNT,
            FixtureKind::SegmentsOnLine => segments::ON_LINE_DECLARED_COUNT,
            FixtureKind::CollinearEdge => collinear_edge::DECLARED_COUNT,
        }
    }

    /// Body lines a complete fixture of this kind contains
    pub fn body_lines(self) -> u64 {
        self.declared_count() * POINTS_PER_TRIANGLE
    }

    pub fn description(self) -> &'static str {
        match self {
            FixtureKind::BigTriangle => "points in a big triangle on x+y+z=0, mostly repeated",
            FixtureKind::ParallelPlanes => "10 planes x+y+z=a with 10000 triangles each",
            FixtureKind::SegmentsOnPlane => "line segments on the plane x+y+z=0",
            FixtureKind::SegmentsOnLine => "segments on the line x=y=z",
            FixtureKind::CollinearEdge => "triangles with one edge on the line x=y=z",
        }
    }

    /// Recognise a fixture by its default file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.file_name() == name)
    }

    /// Write this fixture's body through `out`
    pub fn emit<S, W>(self, sampler: &mut S, out: &mut FixtureWriter<W>) -> io::Result<()>
    where
        S: Sampler + ?Sized,
        W: Write,
    {
        match self {
            FixtureKind::BigTriangle => big_triangle::emit(sampler, out),
            FixtureKind::ParallelPlanes => parallel_planes::emit(sampler, out),
            FixtureKind::SegmentsOnPlane => segments::emit_on_plane(sampler, out),
            FixtureKind::SegmentsOnLine => segments::emit_on_line(sampler, out),
            FixtureKind::CollinearEdge => collinear_edge::emit(sampler, out),
        }
    }

    /// Check one triangle of a parsed fixture.
    ///
    /// `index` is the zero-based triangle position in the body. Returns a
    /// description of the first broken invariant.
    pub fn check_triangle(self, index: usize, triangle: &[Triple; 3]) -> Option<String> {
        match self {
            FixtureKind::BigTriangle => big_triangle::check_triangle(index, triangle),
            FixtureKind::ParallelPlanes => parallel_planes::check_triangle(index, triangle),
            FixtureKind::SegmentsOnPlane => segments::check_on_plane(triangle),
            FixtureKind::SegmentsOnLine => segments::check_on_line(triangle),
            FixtureKind::CollinearEdge => collinear_edge::check_triangle(triangle),
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FixtureKind {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower || kind.file_name() == lower)
            .ok_or_else(|| FixtureError::UnknownKind(s.to_string()))
    }
}

/// Every point of `triangle` lies on x+y+z=0
pub(crate) fn check_zero_plane(triangle: &[Triple; 3]) -> Option<String> {
    triangle
        .iter()
        .position(|p| p.sum() != 0.0)
        .map(|i| format!("point {} has x+y+z = {}, expected 0", i + 1, triangle[i].sum()))
}
