use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ADMIN_KEY, rdl, setup_test_db};

#[test]
fn test_status_defaults_to_logged_out() {
    let db_path = setup_test_db("session_default");

    rdl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rdl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("logged out"))
        .stdout(contains("Records : 0"));
}

#[test]
fn test_login_with_correct_key() {
    let db_path = setup_test_db("session_login_ok");

    rdl()
        .args(["--db", &db_path, "login", ADMIN_KEY])
        .assert()
        .success()
        .stdout(contains("Logged in"))
        .stdout(contains("No drivers registered"));

    rdl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("logged in"));
}

#[test]
fn test_login_trims_the_key() {
    let db_path = setup_test_db("session_login_trim");

    rdl()
        .args(["--db", &db_path, "login", "  123456  "])
        .assert()
        .success();
}

#[test]
fn test_login_with_wrong_key_fails_and_keeps_state() {
    let db_path = setup_test_db("session_login_wrong");

    rdl()
        .args(["--db", &db_path, "login", "654321"])
        .assert()
        .failure()
        .stderr(contains("Wrong key"));

    rdl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("logged out"));
}

#[test]
fn test_wrong_key_does_not_log_out_an_active_session() {
    let db_path = setup_test_db("session_wrong_while_in");

    rdl()
        .args(["--db", &db_path, "login", ADMIN_KEY])
        .assert()
        .success();

    rdl()
        .args(["--db", &db_path, "login", "nope"])
        .assert()
        .failure();

    rdl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("logged in"));
}

#[test]
fn test_logout_is_unconditional() {
    let db_path = setup_test_db("session_logout");

    // Logging out while logged out is fine
    rdl()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success();

    rdl()
        .args(["--db", &db_path, "login", ADMIN_KEY])
        .assert()
        .success();

    rdl()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    rdl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("logged out").and(contains("logged in").not()));
}

#[test]
fn test_management_commands_require_login() {
    let db_path = setup_test_db("session_gate");

    rdl()
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("login required"));

    rdl()
        .args([
            "--db", &db_path, "add", "--name", "Ana", "--dest", "Lima", "--time", "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("login required"));

    rdl()
        .args(["--db", &db_path, "del", "--yes"])
        .assert()
        .failure();

    rdl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Records : 0"));
}

#[test]
fn test_failed_login_is_written_to_internal_log() {
    let db_path = setup_test_db("session_audit");

    rdl()
        .args(["--db", &db_path, "login", "bad"])
        .assert()
        .failure();

    rdl()
        .args(["--db", &db_path, "login", ADMIN_KEY])
        .assert()
        .success();

    rdl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Wrong administrator key"))
        .stdout(contains("Administrator logged in"));
}
