//! Fixture `27.dat`: triangles on ten parallel planes x+y+z=a.
//!
//! Plane `i` has a = 0.001 * i. Vertices of a triangle share a base point
//! and each gets its own offset, so triangles may be degenerate.

use std::io::{self, Write};

use crate::fs::writer::FixtureWriter;
use crate::geometry::{round_to, Coord, Triple};
use crate::sampler::Sampler;

pub const PLANES: usize = 10;
pub const TRIANGLES_PER_PLANE: usize = 10_000;
pub const DECLARED_COUNT: u64 = (PLANES * TRIANGLES_PER_PLANE) as u64;
pub const DELTA: f64 = 0.001;

/// Allowed distance from the plane after rounding
pub const TOLERANCE: f64 = 1e-4;

const MAX_COORD: i64 = 10_000;
const MAX_OFFSET: i64 = 100;
const DECIMALS: usize = 5;

/// Right-hand side of the plane equation for plane `index`
pub fn plane_level(index: usize) -> f64 {
    DELTA * index as f64
}

pub fn emit<S, W>(sampler: &mut S, out: &mut FixtureWriter<W>) -> io::Result<()>
where
    S: Sampler + ?Sized,
    W: Write,
{
    for plane in 0..PLANES {
        let level = plane_level(plane);

        for _ in 0..TRIANGLES_PER_PLANE {
            let x = sampler.sample(0, MAX_COORD);
            let y = sampler.sample(0, MAX_COORD);

            for _ in 0..3 {
                let r = sampler.sample(0, MAX_OFFSET);
                let z = level - (x + r) as f64 - (y + r) as f64;
                out.push(&Triple::new(
                    Coord::Int(x + r),
                    Coord::Int(y + r),
                    Coord::Real(round_to(z, DECIMALS)),
                ))?;
            }
        }
    }

    Ok(())
}

pub(crate) fn check_triangle(index: usize, triangle: &[Triple; 3]) -> Option<String> {
    let plane = index / TRIANGLES_PER_PLANE;
    if plane >= PLANES {
        return Some(format!("triangle {} is past the last plane", index + 1));
    }

    let level = plane_level(plane);
    triangle.iter().enumerate().find_map(|(i, p)| {
        let distance = (p.sum() - level).abs();
        (distance >= TOLERANCE).then(|| {
            format!(
                "point {} has x+y+z = {}, expected {level} (plane {plane})",
                i + 1,
                p.sum()
            )
        })
    })
}
