use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn config_file_path(home: &tempfile::TempDir) -> PathBuf {
    home.path().join(".listentg").join("config.json")
}

const BINARY_NAME: &str = "listentg-dashboard";

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Start the live dashboard"))
        .stdout(contains("set-server"));
}

#[test]
/// A one-character query is rejected before any request is made.
fn short_search_query_is_rejected_locally() {
    let home = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["search", " a "])
        // Nothing listens here; a request would fail the command
        .args(["--api-url", "http://127.0.0.1:9"])
        .env("HOME", home.path())
        .assert()
        .success()
        .stdout(contains("Query must be at least 2 characters"));
}

#[test]
/// A search against an unreachable server fails with an error.
fn search_against_unreachable_server_fails() {
    let home = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["search", "hello", "--api-url", "http://127.0.0.1:9"])
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(contains("Search failed."));
}

#[test]
/// set-server writes the server URL to the config file.
fn set_server_saves_config_file() {
    let home = temp_home();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-server", "--api-url", "https://dash.example.com/"])
        .env("HOME", home.path())
        .assert()
        .success()
        .stdout(contains("Dashboard server saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"api_url\": \"https://dash.example.com\""), "{}", saved);
}

#[test]
/// set-server refuses anything that is not an http(s) URL.
fn set_server_rejects_invalid_url() {
    let home = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-server", "--api-url", "dash.example.com"])
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(contains("expected an http:// or https:// address"));
    assert!(!config_file_path(&home).exists());
}

#[test]
/// reset deletes an existing config file.
fn reset_deletes_config_file() {
    let home = temp_home();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", home.path())
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    assert!(!config_path.exists());
}

#[test]
/// reset succeeds when there is nothing to delete.
fn reset_without_config_file_succeeds() {
    let home = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset").env("HOME", home.path()).assert().success();
}
