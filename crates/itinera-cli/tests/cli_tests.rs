use assert_cmd::Command;
use predicates::prelude::*;

/// Nothing listens on the discard port, so any request fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Helper function to create a Command with --no-color and an unreachable
/// service, so a test that reaches the network fails loudly.
fn itinera_cmd() -> Command {
    let mut cmd = Command::cargo_bin("itinera").expect("Failed to find itinera binary");
    cmd.env_remove("ITINERA_API_URL")
        .env_remove("ITINERA_API_TIMEOUT_SECS")
        .args(["--no-color", "--api-url", UNREACHABLE_API, "--timeout", "2"]);
    cmd
}

#[test]
fn test_cli_help_lists_commands() {
    itinera_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("hotels"))
        .stdout(predicate::str::contains("health"));
}

#[test]
fn test_cli_create_help_lists_fields() {
    itinera_cmd()
        .args(["plan", "create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--location"))
        .stdout(predicate::str::contains("--start-date"))
        .stdout(predicate::str::contains("--score"))
        .stdout(predicate::str::contains("--travel-type"));
}

#[test]
fn test_cli_edit_help_warns_unset_fields_use_defaults() {
    itinera_cmd()
        .args(["plan", "edit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creation defaults"))
        .stdout(predicate::str::contains("repeat every field you want to keep"));
}

#[test]
fn test_cli_create_reports_every_validation_failure() {
    itinera_cmd()
        .args(["plan", "create", "--location", "   "])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please enter a location"))
        .stdout(predicate::str::contains("Please select at least one interest"))
        .stdout(predicate::str::contains("Failed to create plan").not())
        .stderr(predicate::str::contains("Plan was not created"));
}

#[test]
fn test_cli_create_rejects_past_date_and_zero_days() {
    itinera_cmd()
        .args([
            "plan",
            "create",
            "--location",
            "Paris",
            "--start-date",
            "2000-01-01",
            "--days",
            "0",
            "--interests",
            "Art,Food",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Please choose a start date that is today or later",
        ))
        .stdout(predicate::str::contains(
            "Please enter a number of days of at least 1",
        ));
}

#[test]
fn test_cli_create_rejects_out_of_range_score() {
    itinera_cmd()
        .args(["plan", "create", "--location", "Paris", "--score", "Nature=1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Interest score must be between 0 and 1",
        ));
}

#[test]
fn test_cli_create_rejects_unknown_budget() {
    itinera_cmd()
        .args([
            "plan",
            "create",
            "--location",
            "Paris",
            "--interests",
            "Art",
            "--budget",
            "lavish",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid budget"));
}

#[test]
fn test_cli_create_unreachable_service_shows_generic_message() {
    itinera_cmd()
        .args([
            "plan",
            "create",
            "--location",
            "Paris",
            "--interests",
            "Art,Food",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Failed to create plan. Please try again.",
        ));
}

#[test]
fn test_cli_hotels_rejects_reversed_dates() {
    itinera_cmd()
        .args([
            "hotels",
            "search",
            "Paris",
            "--checkin",
            "2030-06-04",
            "--checkout",
            "2030-06-01",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_health_unreachable_fails() {
    itinera_cmd()
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Planning service is unreachable"));
}

#[test]
fn test_cli_rejects_invalid_api_url() {
    Command::cargo_bin("itinera")
        .expect("Failed to find itinera binary")
        .args(["--api-url", "localhost:8000", "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize planning client"));
}

#[test]
fn test_cli_reads_api_url_from_environment() {
    Command::cargo_bin("itinera")
        .expect("Failed to find itinera binary")
        .env("ITINERA_API_URL", "localhost:8000")
        .env_remove("ITINERA_API_TIMEOUT_SECS")
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid planning service environment"));
}

#[test]
fn test_cli_api_url_flag_overrides_environment() {
    Command::cargo_bin("itinera")
        .expect("Failed to find itinera binary")
        .env("ITINERA_API_URL", "http://127.0.0.1:1")
        .env_remove("ITINERA_API_TIMEOUT_SECS")
        .env("RUST_LOG", "info")
        .args(["--api-url", UNREACHABLE_API, "--timeout", "2", "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Itinera started against http://127.0.0.1:9"));
}

#[test]
fn test_cli_create_warns_about_unknown_interest() {
    itinera_cmd()
        .env("RUST_LOG", "warn")
        .args([
            "plan",
            "create",
            "--location",
            "Paris",
            "--interests",
            "Art, Karaoke",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interest 'Karaoke' is not in the catalog"))
        .stderr(predicate::str::contains("Interest 'Art'").not());
}
