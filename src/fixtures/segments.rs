//! Fixtures `15.dat` and `16.dat`: degenerate segments.
//!
//! Every triangle repeats its first vertex, so the consumer sees a segment
//! rather than a proper triangle.

use std::io::{self, Write};

use crate::fs::writer::FixtureWriter;
use crate::geometry::Triple;
use crate::sampler::Sampler;

use super::check_zero_plane;

pub const ON_PLANE_DECLARED_COUNT: u64 = 10_000;
pub const ON_LINE_DECLARED_COUNT: u64 = 10_000;

const PLANE_MAX_COORD: i64 = 10_000;
const PLANE_MAX_OFFSET: i64 = 1_000;

const LINE_MAX_COORD: i64 = 100_000;
/// Distance along each axis from the base point to either end of a line segment
pub const LINE_OFFSET: i64 = 2;

/// Segments on the plane x+y+z=0
pub fn emit_on_plane<S, W>(sampler: &mut S, out: &mut FixtureWriter<W>) -> io::Result<()>
where
    S: Sampler + ?Sized,
    W: Write,
{
    for _ in 0..ON_PLANE_DECLARED_COUNT {
        let x = sampler.sample(0, PLANE_MAX_COORD);
        let y = sampler.sample(0, PLANE_MAX_COORD);

        let r = sampler.sample(0, PLANE_MAX_OFFSET);
        out.repeat(&Triple::on_zero_plane(x + r, y + r), 2)?;

        let r = sampler.sample(0, PLANE_MAX_OFFSET);
        out.push(&Triple::on_zero_plane(x + r, y + r))?;
    }

    Ok(())
}

/// Segments on the line x=y=z
pub fn emit_on_line<S, W>(sampler: &mut S, out: &mut FixtureWriter<W>) -> io::Result<()>
where
    S: Sampler + ?Sized,
    W: Write,
{
    for _ in 0..ON_LINE_DECLARED_COUNT {
        let x = sampler.sample(0, LINE_MAX_COORD);

        out.repeat(&Triple::diagonal(x + LINE_OFFSET), 2)?;
        out.push(&Triple::diagonal(x - LINE_OFFSET))?;
    }

    Ok(())
}

pub(crate) fn check_on_plane(triangle: &[Triple; 3]) -> Option<String> {
    if let Some(violation) = check_zero_plane(triangle) {
        return Some(violation);
    }
    if triangle[0] != triangle[1] {
        return Some("first two points should coincide".to_string());
    }
    None
}

pub(crate) fn check_on_line(triangle: &[Triple; 3]) -> Option<String> {
    if let Some(i) = triangle.iter().position(|p| !p.is_diagonal()) {
        return Some(format!("point {} is not on the line x=y=z", i + 1));
    }
    if triangle[0] != triangle[1] {
        return Some("first two points should coincide".to_string());
    }
    let gap = triangle[0].x.as_f64() - triangle[2].x.as_f64();
    if gap != (2 * LINE_OFFSET) as f64 {
        return Some(format!(
            "third point should sit {} below the first, found {gap}",
            2 * LINE_OFFSET
        ));
    }
    None
}
