//! Fixture `17.dat`: triangles whose first and last vertices lie on x=y=z.

use std::io::{self, Write};

use crate::fs::writer::FixtureWriter;
use crate::geometry::Triple;
use crate::sampler::Sampler;

use super::segments::LINE_OFFSET;

pub const DECLARED_COUNT: u64 = 10_000;

const MAX_COORD: i64 = 100_000;

pub fn emit<S, W>(sampler: &mut S, out: &mut FixtureWriter<W>) -> io::Result<()>
where
    S: Sampler + ?Sized,
    W: Write,
{
    for _ in 0..DECLARED_COUNT {
        let x = sampler.sample(0, MAX_COORD);

        out.push(&Triple::diagonal(x + LINE_OFFSET))?;

        let free_x = sampler.sample(0, MAX_COORD);
        let free_y = sampler.sample(0, MAX_COORD);
        let free_z = sampler.sample(0, MAX_COORD);
        out.push(&Triple::ints(free_x, free_y, free_z))?;

        out.push(&Triple::diagonal(x - LINE_OFFSET))?;
    }

    Ok(())
}

pub(crate) fn check_triangle(triangle: &[Triple; 3]) -> Option<String> {
    let [first, _, last] = triangle;
    if !first.is_diagonal() {
        return Some("point 1 is not on the line x=y=z".to_string());
    }
    if !last.is_diagonal() {
        return Some("point 3 is not on the line x=y=z".to_string());
    }
    let gap = first.x.as_f64() - last.x.as_f64();
    if gap != (2 * LINE_OFFSET) as f64 {
        return Some(format!(
            "point 3 should sit {} below point 1, found {gap}",
            2 * LINE_OFFSET
        ));
    }
    None
}
