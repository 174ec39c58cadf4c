//! Integration tests for trifix
//!
//! These tests drive fixture generation end to end: library calls writing
//! real files, the verifier reading them back, and the `trifix` binary.

pub mod cli;
pub mod determinism;
pub mod helpers;
pub mod properties;
