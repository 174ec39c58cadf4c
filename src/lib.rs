//! trifix - fixture generator for triangle intersection tests
//!
//! Writes point sets in degenerate configurations (repeated points,
//! parallel planes, zero-length and collinear segments) in the format read
//! by the intersection program: a triangle count, then three `x y z` lines
//! per triangle.

pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod fs;
pub mod geometry;
pub mod logging;
pub mod sampler;
pub mod verify;

pub use error::{FixtureError, Result};
pub use fixtures::FixtureKind;
