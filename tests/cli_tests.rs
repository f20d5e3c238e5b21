use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{Sandbox, read};

#[test]
fn test_whoami_without_session() {
    let sb = Sandbox::new();

    sb.fo()
        .arg("whoami")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Session Expired"));
}

#[test]
fn test_whoami_reads_stored_session() {
    let sb = Sandbox::new();
    sb.login_as("42");

    sb.fo()
        .arg("whoami")
        .assert()
        .success()
        .stdout(contains("Logged in as user 42"));
}

#[test]
fn test_logout_removes_session_and_is_idempotent() {
    let sb = Sandbox::new();
    sb.login_as("42");

    sb.fo()
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("Logged out."));
    assert!(!sb.session_path().exists());

    sb.fo().arg("logout").assert().success();
}

#[test]
fn test_identity_bound_commands_need_a_session() {
    let sb = Sandbox::new();

    sb.fo()
        .arg("tasks")
        .assert()
        .failure()
        .stderr(contains("Session Expired").and(contains("Failed to fetch assigned tasks.")));

    sb.fo()
        .args(["attendance", "check-in"])
        .assert()
        .failure()
        .stderr(contains("Failed to check in."));

    sb.fo()
        .args(["projects", "list"])
        .assert()
        .failure()
        .stderr(contains("Session Expired"));

    sb.fo()
        .args(["inventory", "report", "--task", "1", "--add", "3:2"])
        .assert()
        .failure()
        .stderr(contains("Session Expired"));
}

#[test]
fn test_unknown_task_status_is_rejected_before_any_request() {
    let sb = Sandbox::new();
    sb.login_as("42");

    sb.fo()
        .args(["task-status", "7", "Archived"])
        .assert()
        .failure()
        .stderr(contains("Invalid Input").and(contains("Invalid status: Archived")));
}

#[test]
fn test_usage_quantity_must_be_a_positive_integer() {
    let sb = Sandbox::new();
    sb.login_as("42");

    for bad in ["3:abc", "3:1.5", "3:0", "3:-2"] {
        sb.fo()
            .args(["inventory", "report", "--task", "1", "--add", bad])
            .assert()
            .failure()
            .stderr(contains("Invalid quantity"));
    }

    sb.fo()
        .args(["inventory", "report", "--task", "1", "--add", "seven"])
        .assert()
        .failure()
        .stderr(contains("ITEM_ID:QUANTITY"));
}

#[test]
fn test_usage_report_requires_task_and_items() {
    let sb = Sandbox::new();
    sb.login_as("42");

    sb.fo()
        .args(["inventory", "report", "--add", "3:2"])
        .assert()
        .failure()
        .stderr(contains("Please select a task."));

    sb.fo()
        .args(["inventory", "report", "--task", "1"])
        .assert()
        .failure()
        .stderr(contains("Please add at least one item to report usage."));
}

#[test]
fn test_login_refuses_empty_password() {
    let sb = Sandbox::new();

    sb.fo()
        .args(["login", "-u", "rossi", "-p", ""])
        .assert()
        .failure()
        .stderr(contains("Username/email and password are required."));
    assert!(!sb.session_path().exists());
}

#[test]
fn test_network_failure_is_reported_with_context() {
    let sb = Sandbox::new();
    sb.login_as("42");

    sb.fo()
        .arg("tasks")
        .assert()
        .failure()
        .stderr(contains("Network Error").and(contains("Failed to fetch assigned tasks.")));
}

#[test]
fn test_invalid_api_url_is_a_configuration_error() {
    let sb = Sandbox::new();
    sb.login_as("42");

    sb.fo_at("ftp://example.test/api")
        .arg("tasks")
        .assert()
        .failure()
        .code(1)
        .stderr(
            contains("Could not load the configuration.")
                .and(contains("only http and https are supported")),
        );
}

#[test]
fn test_export_options_require_a_file() {
    let sb = Sandbox::new();

    sb.fo()
        .args(["tasks", "--format", "json"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_declined_overwrite_stops_before_fetching() {
    let sb = Sandbox::new();
    sb.login_as("42");
    let out = sb.home.path().join("tasks.csv");
    fs::write(&out, "keep me").unwrap();

    sb.fo()
        .args(["tasks", "--export", &out.to_string_lossy()])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten").and(contains("Network Error").not()));
    assert_eq!(read(&out), "keep me");
}

#[test]
fn test_export_to_directory_is_refused_with_force() {
    let sb = Sandbox::new();
    sb.login_as("42");

    sb.fo()
        .args(["attendance", "history", "--export", &sb.home.path().to_string_lossy(), "-f"])
        .assert()
        .failure()
        .stderr(contains("is a directory"));
}

#[test]
fn test_config_print_shows_overrides() {
    let sb = Sandbox::new();

    sb.fo()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(
            contains("api_url: http://127.0.0.1:9/api")
                .and(contains("request_timeout_secs: 10"))
                .and(contains("location_timeout_secs: 20")),
        );
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let sb = Sandbox::new();

    sb.fo()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("fieldops initialization completed!"));
    assert!(!sb.config_path().exists());
}

#[test]
fn test_init_then_check_and_migrate() {
    let sb = Sandbox::new();

    sb.fo().arg("init").assert().success();
    assert!(read(&sb.config_path()).contains("api_url: http://127.0.0.1:9/api"));

    sb.fo()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("is up to date"));

    // an older file without the timeouts
    fs::write(sb.config_path(), "api_url: http://10.0.0.5:3000/api\n").unwrap();

    sb.fo()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("request_timeout_secs"));

    sb.fo()
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added to"));

    let content = read(&sb.config_path());
    assert!(content.contains("api_url: http://10.0.0.5:3000/api"));
    assert!(content.contains("location_timeout_secs: 20"));
}

#[test]
fn test_broken_config_is_reported() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.config_path().parent().unwrap()).unwrap();
    fs::write(sb.config_path(), "api_url: [unterminated\n").unwrap();

    sb.fo()
        .arg("whoami")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
