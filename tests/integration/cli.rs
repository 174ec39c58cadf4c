//! End-to-end runs of the trifix binary

use std::fs;

use tempfile::TempDir;
use trifix::FixtureKind;

use super::helpers::run_trifix;

#[test]
fn generates_fixture_with_default_name() {
    let temp = TempDir::new().unwrap();

    let output = run_trifix(temp.path(), &["segments-on-line", "--seed", "5"]);
    assert!(output.status.success(), "{output:?}");

    let content = fs::read_to_string(temp.path().join("16.dat")).unwrap();
    assert!(content.starts_with("10000\n"));
    assert_eq!(content.lines().count(), 30_001);
}

#[test]
fn seed_flag_reproduces_output() {
    let temp = TempDir::new().unwrap();

    run_trifix(temp.path(), &["big-triangle", "--seed", "3", "-o", "a.dat"]);
    run_trifix(temp.path(), &["big-triangle", "--seed", "3", "-o", "b.dat"]);

    assert_eq!(
        fs::read(temp.path().join("a.dat")).unwrap(),
        fs::read(temp.path().join("b.dat")).unwrap()
    );
}

#[test]
fn all_then_verify_every_file() {
    let temp = TempDir::new().unwrap();

    let output = run_trifix(temp.path(), &["all", "--out-dir", "out", "--seed", "8"]);
    assert!(output.status.success(), "{output:?}");

    for name in ["13.dat", "27.dat", "15.dat", "16.dat", "17.dat"] {
        let file = format!("out/{name}");
        let output = run_trifix(temp.path(), &["verify", &file]);
        assert!(output.status.success(), "{name}: {output:?}");
    }
}

#[test]
fn settings_file_supplies_output_dir_and_seed() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("trifix.toml"),
        "output_dir = \"from-settings\"\nseed = 11\n",
    )
    .unwrap();

    let output = run_trifix(temp.path(), &["collinear-edge"]);
    assert!(output.status.success(), "{output:?}");
    let first = fs::read(temp.path().join("from-settings/17.dat")).unwrap();

    run_trifix(temp.path(), &["collinear-edge"]);
    let second = fs::read(temp.path().join("from-settings/17.dat")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn verify_rejects_mismatched_header() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("16.dat"), "2\n3 3 3\n3 3 3\n-1 -1 -1\n").unwrap();

    let output = run_trifix(temp.path(), &["verify", "16.dat"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed verification"), "{stderr}");
}

#[test]
fn unwritable_destination_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("blocker"), "").unwrap();

    let output = run_trifix(temp.path(), &["segments-on-plane", "-o", "blocker/15.dat"]);
    assert!(!output.status.success());
    assert!(!temp.path().join("blocker/15.dat").exists());
}

#[test]
fn unknown_kind_is_rejected_by_verify() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("x.dat"), "0\n").unwrap();

    let output = run_trifix(temp.path(), &["verify", "x.dat", "--kind", "hexagon"]);
    assert!(!output.status.success());
}

#[test]
fn list_shows_every_kind() {
    let temp = TempDir::new().unwrap();

    let output = run_trifix(temp.path(), &["list"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for kind in FixtureKind::ALL {
        assert!(stdout.contains(kind.name()), "missing {}", kind.name());
        assert!(stdout.contains(kind.file_name()), "missing {}", kind.file_name());
        assert!(stdout.contains(&kind.declared_count().to_string()));
    }
    assert!(stdout.contains("27.dat") && stdout.contains("100000"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();

    let output = run_trifix(temp.path(), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("parallel-planes"));
}
