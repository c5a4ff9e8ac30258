//! Runs the `outbreak` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

use outbreak_test_utils::{random_grid, DENSE_BANDS};

fn outbreak(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_outbreak"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to launch outbreak binary")
}

fn write_map(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
}

#[test]
fn prints_time_and_cores_and_writes_default_output() {
    let dir = tempfile::tempdir().unwrap();
    write_map(&dir.path().join("map.txt"), "3 3\nH H H\nH Z H\nH H H\n");

    let out = outbreak(&["map.txt", "1", "3"], dir.path());
    assert!(out.status.success(), "{out:?}");

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    let secs = lines[0].strip_prefix("Time = ").unwrap();
    assert_eq!(secs.split('.').nth(1).map(str::len), Some(6));
    assert_eq!(lines[1], "Cores = 3");

    let written = std::fs::read_to_string(dir.path().join("final_map.txt")).unwrap();
    assert_eq!(written, "H Z H\nH Z H\nH H H\n");
}

#[test]
fn strategies_write_identical_maps() {
    let dir = tempfile::tempdir().unwrap();
    let grid = random_grid(40, 99, DENSE_BANDS);
    let body: String = grid
        .rows()
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>() + "\n")
        .collect();
    write_map(&dir.path().join("map.txt"), &format!("40 40\n{body}"));

    let seq = outbreak(&["--sequential", "-o", "seq.txt", "map.txt", "15"], dir.path());
    let par = outbreak(&["-o", "par.txt", "map.txt", "15", "4"], dir.path());
    assert!(seq.status.success() && par.status.success());
    assert!(String::from_utf8_lossy(&seq.stdout).contains("Cores = 1"));

    let a = std::fs::read_to_string(dir.path().join("seq.txt")).unwrap();
    let b = std::fs::read_to_string(dir.path().join("par.txt")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn redirected_logs_have_no_escape_codes() {
    let dir = tempfile::tempdir().unwrap();
    write_map(&dir.path().join("map.txt"), "2 2\nZ H\nH .\n");

    let out = outbreak(&["-vv", "map.txt", "2", "2"], dir.path());
    assert!(out.status.success(), "{out:?}");
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("simulation finished"), "{stderr}");
    assert!(!stderr.contains('\u{1b}'), "{stderr:?}");
}

#[test]
fn usage_error_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = outbreak(&["map.txt"], dir.path());
    assert!(!out.status.success());
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = outbreak(&["nope.txt", "2"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("nope.txt"), "{stderr}");
}

#[test]
fn invalid_dimension_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_map(&dir.path().join("map.txt"), "0 0\n");
    let out = outbreak(&["map.txt", "2"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("final_map.txt").exists());
}

#[test]
fn unwritable_output_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_map(&dir.path().join("map.txt"), "1 1\nZ\n");
    let out = outbreak(&["-o", "no/such/dir/out.txt", "map.txt", "1"], dir.path());
    assert_eq!(out.status.code(), Some(1));
}
