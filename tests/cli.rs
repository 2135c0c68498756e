use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".lipitrack").join("config.json")
}

/// Command with an isolated `$HOME` and no environment override
fn lipitrack(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env_remove("LIPITRACK_ENVIRONMENT");
    cmd
}

const BINARY_NAME: &str = "lipitrack";

// Nothing listens on port 1, so every request fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:1";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("clear-config"));
}

#[test]
/// Headless start shows the error banner when the API cannot be reached.
fn headless_start_reports_error_banner() {
    let tmp = temp_config_dir();
    lipitrack(&tmp)
        .args(["start", "--headless", "--api-url", UNREACHABLE_API])
        .assert()
        .success()
        .stdout(contains("Starting headless mode"))
        .stdout(contains("User ID: 1"))
        .stdout(contains("Error"));
}

#[test]
/// The users command fails when the API cannot be reached.
fn users_command_fails_without_api() {
    let tmp = temp_config_dir();
    lipitrack(&tmp)
        .args(["users", "--api-url", UNREACHABLE_API])
        .assert()
        .failure()
        .stdout(contains("Failed to list users"));
}

#[test]
/// Configure writes the endpoint root to the config file.
fn configure_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    lipitrack(&tmp)
        .args(["configure", "--api-url", "http://lipitrack.test:8000/"])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("http://lipitrack.test:8000/"));
}

#[test]
/// Configure rejects values that are neither `local` nor a URL.
fn configure_rejects_invalid_url() {
    let tmp = temp_config_dir();
    lipitrack(&tmp)
        .args(["configure", "--api-url", "lipitrack.test"])
        .assert()
        .failure()
        .stdout(contains("Invalid API URL"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Clear-config should delete an existing config file.
fn clear_config_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();
    assert!(config_path.exists());

    lipitrack(&tmp)
        .arg("clear-config")
        .assert()
        .success()
        .stdout(contains("Clearing configuration file"));

    assert!(!config_path.exists());
}
