#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn spl() -> Command {
    cargo_bin_cmd!("simplistic")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_simplistic.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a throwaway HOME directory so config-writing tests never touch
/// the real user configuration
pub fn setup_test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_simplistic_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    spl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    spl()
        .args(["--db", db_path, "--test", "add", "Buy milk"])
        .assert()
        .success();

    spl()
        .args(["--db", db_path, "--test", "add", "Walk the dog"])
        .assert()
        .success();
}
