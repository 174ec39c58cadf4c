//! Fixture `13.dat`: points in a big triangle on x+y+z=0.
//!
//! The first triangle has three independent points. Each of the remaining
//! 999 triangles is a single point repeated three times.

use std::io::{self, Write};

use crate::fs::writer::FixtureWriter;
use crate::geometry::Triple;
use crate::sampler::Sampler;

use super::check_zero_plane;

pub const DECLARED_COUNT: u64 = 1_000;

const MAX_COORD: i64 = 10_000;
const DISTINCT_POINTS: usize = 3;
const REPEATED_POINTS: usize = 999;
const REPEATS: usize = 3;

pub fn emit<S, W>(sampler: &mut S, out: &mut FixtureWriter<W>) -> io::Result<()>
where
    S: Sampler + ?Sized,
    W: Write,
{
    for _ in 0..DISTINCT_POINTS {
        out.push(&sample_point(sampler))?;
    }

    for _ in 0..REPEATED_POINTS {
        let point = sample_point(sampler);
        out.repeat(&point, REPEATS)?;
    }

    Ok(())
}

fn sample_point<S: Sampler + ?Sized>(sampler: &mut S) -> Triple {
    let x = sampler.sample(0, MAX_COORD);
    let y = sampler.sample(0, MAX_COORD);
    Triple::on_zero_plane(x, y)
}

pub(crate) fn check_triangle(index: usize, triangle: &[Triple; 3]) -> Option<String> {
    if let Some(violation) = check_zero_plane(triangle) {
        return Some(violation);
    }
    if index > 0 && (triangle[0] != triangle[1] || triangle[1] != triangle[2]) {
        return Some("expected the same point three times".to_string());
    }
    None
}
