//! Shared test helpers for fixture integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use trifix::fs::reader::{read_fixture, ParsedFixture};
use trifix::fs::writer::write_fixture;
use trifix::sampler::Sampler;
use trifix::FixtureKind;

/// Test helper: write `kind` into a fresh temp directory under its default name
pub fn generate_into_temp<S: Sampler>(kind: FixtureKind, sampler: &mut S) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join(kind.file_name());
    write_fixture(&path, kind, sampler).expect("Failed to write fixture");
    (temp, path)
}

/// Test helper: read a fixture written by a test
pub fn load(path: &Path) -> ParsedFixture {
    read_fixture(path).expect("Failed to read fixture")
}

/// Test helper: body lines of a fixture file, header excluded
pub fn body_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read fixture")
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

/// Test helper: run the trifix binary in `dir`
pub fn run_trifix(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trifix"))
        .args(args)
        .current_dir(dir)
        .env_remove("TRIFIX_LOG")
        .output()
        .expect("Failed to run trifix")
}
