#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_KEY: &str = "123456";

/// Binary under test, with HOME pointed at a scratch dir so no user
/// configuration leaks into the run.
pub fn rdl() -> Command {
    let mut cmd = cargo_bin_cmd!("rdriverlog");
    let home = env::temp_dir().join("rdriverlog_test_home");
    fs::create_dir_all(&home).ok();
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdriverlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB in test mode and log in as administrator
pub fn init_and_login(db_path: &str) {
    rdl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rdl()
        .args(["--db", db_path, "login", ADMIN_KEY])
        .assert()
        .success();
}

/// Add one driver trip through the CLI
pub fn add_driver(db_path: &str, name: &str, dest: &str, date: &str, time: &str) {
    rdl()
        .args([
            "--db", db_path, "add", "--name", name, "--dest", dest, "--date", date, "--time",
            time,
        ])
        .assert()
        .success();
}

/// Rows of the driver table (header excluded), in display order
pub fn table_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip_while(|l| !l.starts_with("NAME"))
        .skip(1)
        .take_while(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect()
}
