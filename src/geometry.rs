//! Coordinate values and their canonical text form.
//!
//! Every fixture body line is a [`Triple`] rendered as `<x> <y> <z>` with
//! single spaces. Integer coordinates print as plain integers; real
//! coordinates print in shortest round-trip form and always keep a
//! fractional part (`-579.0`, `-12344.997`).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single coordinate value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    Int(i64),
    Real(f64),
}

impl Coord {
    pub fn as_f64(self) -> f64 {
        match self {
            Coord::Int(v) => v as f64,
            Coord::Real(v) => v,
        }
    }
}

impl From<i64> for Coord {
    fn from(value: i64) -> Self {
        Coord::Int(value)
    }
}

impl From<f64> for Coord {
    fn from(value: f64) -> Self {
        Coord::Real(value)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::Int(v) => write!(f, "{v}"),
            // Debug keeps the ".0" on integral reals
            Coord::Real(v) => write!(f, "{v:?}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a finite number: {0:?}")]
pub struct CoordParseError(String);

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Coord::Int(v));
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Coord::Real(v)),
            _ => Err(CoordParseError(s.to_string())),
        }
    }
}

/// A point in 3-space, one fixture body line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple {
    pub x: Coord,
    pub y: Coord,
    pub z: Coord,
}

impl Triple {
    pub fn new(x: Coord, y: Coord, z: Coord) -> Self {
        Self { x, y, z }
    }

    pub fn ints(x: i64, y: i64, z: i64) -> Self {
        Self::new(Coord::Int(x), Coord::Int(y), Coord::Int(z))
    }

    /// Point on the plane x+y+z=0 with the given x and y
    pub fn on_zero_plane(x: i64, y: i64) -> Self {
        Self::ints(x, y, -x - y)
    }

    /// Point on the line x=y=z
    pub fn diagonal(v: i64) -> Self {
        Self::ints(v, v, v)
    }

    pub fn sum(&self) -> f64 {
        self.x.as_f64() + self.y.as_f64() + self.z.as_f64()
    }

    pub fn is_diagonal(&self) -> bool {
        let x = self.x.as_f64();
        x == self.y.as_f64() && x == self.z.as_f64()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Render one body line (without the trailing newline).
///
/// # Examples
///
/// ```
/// use trifix::geometry::{format_triple, Coord};
///
/// assert_eq!(
///     format_triple(Coord::Int(3), Coord::Int(4), Coord::Int(-7)),
///     "3 4 -7"
/// );
/// assert_eq!(
///     format_triple(Coord::Int(1), Coord::Int(2), Coord::Real(-2.999)),
///     "1 2 -2.999"
/// );
/// ```
pub fn format_triple(x: Coord, y: Coord, z: Coord) -> String {
    Triple::new(x, y, z).to_string()
}

/// Round `value` to `places` decimals.
///
/// Ties are broken half-to-even on the exact binary value, the same rule
/// used by Rust's fixed-precision formatting. Every formatted `f64`,
/// including `inf` and `NaN`, parses back, so the `unwrap_or` arm is never
/// taken; callers only pass finite plane offsets.
pub fn round_to(value: f64, places: usize) -> f64 {
    debug_assert!(value.is_finite(), "cannot round non-finite value {value}");
    format!("{value:.places$}").parse().unwrap_or(value)
}
