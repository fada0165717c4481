#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh DB with schema only
pub fn init_db(db_path: &str) {
    rwh()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_pair(db_path: &str, loc: &str, start: &str, end: &str) {
    rwh()
        .args(["--db", db_path, "add", "--loc", loc, "--in", start, "--out", end])
        .assert()
        .success();
}

pub fn clock(db_path: &str, loc: Option<&str>, at: &str) -> assert_cmd::assert::Assert {
    let mut cmd = rwh();
    cmd.args(["--db", db_path, "clock", "--at", at]);
    if let Some(l) = loc {
        cmd.args(["--loc", l]);
    }
    cmd.assert()
}

/// Two sessions in the week of 2024-06-03 (11h) and one in the next (8h)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_pair(db_path, "Depot", "2024-06-03 09:00", "2024-06-03 17:00");
    add_pair(db_path, "Depot", "2024-06-09 09:00", "2024-06-09 12:00");
    add_pair(db_path, "Yard", "2024-06-10 09:00", "2024-06-10 17:00");
}

pub fn list_stdout(db_path: &str, extra: &[&str]) -> String {
    let out = rwh()
        .args(["--db", db_path, "list"])
        .args(extra)
        .output()
        .expect("failed to run list");
    assert!(out.status.success());
    String::from_utf8_lossy(&out.stdout).to_string()
}
