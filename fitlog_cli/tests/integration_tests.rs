//! Integration tests for the fitlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Workout and meal logging with same-day merging
//! - Backup export/import round trips
//! - Corruption recovery
//! - Clear-all and delete flows

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitlog"))
}

/// Read the persisted store document as JSON
fn read_store(data_dir: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(data_dir.join("store.json")).expect("Failed to read store");
    serde_json::from_str(&contents).expect("Store is not valid JSON")
}

fn log_workout(data_dir: &Path, name: &str) {
    cli()
        .arg("workout")
        .arg("log")
        .arg(name)
        .arg("--sets")
        .arg("3")
        .arg("--reps")
        .arg("10")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();
}

fn log_meal(data_dir: &Path, name: &str, calories: &str) {
    cli()
        .arg("meal")
        .arg("log")
        .arg(name)
        .arg("--calories")
        .arg(calories)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Personal workout and nutrition tracker",
        ));
}

#[test]
fn test_workout_log_creates_store() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli()
        .arg("workout")
        .arg("log")
        .arg("Squats")
        .arg("--sets")
        .arg("3")
        .arg("--reps")
        .arg("10")
        .arg("--weight")
        .arg("185")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Squats"));

    let store = read_store(data_dir);
    assert_eq!(store["workouts"].as_array().unwrap().len(), 1);
    assert_eq!(store["workouts"][0]["exercises"][0]["name"], "Squats");
    assert_eq!(store["workouts"][0]["exercises"][0]["weight"], 185.0);
}

#[test]
fn test_same_day_workouts_merge_into_one_day() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_workout(data_dir, "Squats");
    log_workout(data_dir, "Deadlifts");

    let store = read_store(data_dir);
    let workouts = store["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 1, "Same-day saves must merge into one day");

    let exercises = workouts[0]["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0]["name"], "Squats");
    assert_eq!(exercises[1]["name"], "Deadlifts");
}

#[test]
fn test_today_shows_meal_totals() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_meal(data_dir, "Oats", "300");
    log_meal(data_dir, "Chicken", "400");

    cli()
        .arg("today")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories:  700 kcal"));
}

#[test]
fn test_workout_history_shows_category_badge() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_workout(data_dir, "Squats");
    log_workout(data_dir, "Deadlifts");

    cli()
        .arg("workout")
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("(Ba, L)"));
}

#[test]
fn test_calendar_marks_workout_day() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_workout(data_dir, "Squats");

    cli()
        .arg("calendar")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Legend"))
        .stdout(predicate::str::contains(": L"));
}

#[test]
fn test_export_import_roundtrip() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let backup_path = temp_dir.path().join("backup.json");

    log_workout(data_dir, "Squats");
    log_meal(data_dir, "Oats", "300");
    let before = read_store(data_dir);

    cli()
        .arg("export")
        .arg("--out")
        .arg(&backup_path)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup exported"));

    // Wipe, then restore
    cli()
        .arg("clear")
        .arg("--yes")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();

    cli()
        .arg("import")
        .arg(&backup_path)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup restored"));

    let after = read_store(data_dir);
    assert_eq!(after["workouts"], before["workouts"]);
    assert_eq!(after["meals"], before["meals"]);
}

#[test]
fn test_export_document_shape() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let backup_path = temp_dir.path().join("backup.json");

    log_workout(data_dir, "Squats");

    cli()
        .arg("export")
        .arg("--out")
        .arg(&backup_path)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();

    let contents = fs::read_to_string(&backup_path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(doc["appName"], "Fitlog");
    assert!(doc["exportDate"].is_string());
    assert!(doc["workouts"].is_array());
    assert!(doc["meals"].is_array());
}

#[test]
fn test_import_missing_keys_rejected_and_store_untouched() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let bad_path = temp_dir.path().join("bad.json");

    log_workout(data_dir, "Squats");
    let before = read_store(data_dir);

    fs::write(&bad_path, r#"{"foo": 1}"#).unwrap();

    cli()
        .arg("import")
        .arg(&bad_path)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backup"));

    assert_eq!(read_store(data_dir), before);
}

#[test]
fn test_import_unparsable_file_rejected() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let bad_path = temp_dir.path().join("bad.json");

    fs::write(&bad_path, "not json {{{").unwrap();

    cli()
        .arg("import")
        .arg(&bad_path)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backup parse error"));
}

#[test]
fn test_workout_delete_by_id() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_workout(data_dir, "Squats");
    let store = read_store(data_dir);
    let id = store["workouts"][0]["id"].as_str().unwrap().to_string();

    cli()
        .arg("workout")
        .arg("delete")
        .arg(&id)
        .arg("--yes")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout deleted"));

    let store = read_store(data_dir);
    assert!(store["workouts"].as_array().unwrap().is_empty());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_workout(data_dir, "Squats");

    cli()
        .arg("workout")
        .arg("delete")
        .arg("00000000-0000-0000-0000-000000000000")
        .arg("--yes")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No workout with id"));

    let store = read_store(data_dir);
    assert_eq!(store["workouts"].as_array().unwrap().len(), 1);
}

#[test]
fn test_clear_wipes_everything() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_workout(data_dir, "Squats");
    log_meal(data_dir, "Oats", "300");

    cli()
        .arg("clear")
        .arg("--yes")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    let store = read_store(data_dir);
    assert!(store["workouts"].as_array().unwrap().is_empty());
    assert!(store["meals"].as_array().unwrap().is_empty());
}

#[test]
fn test_corrupted_store_starts_empty() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    fs::create_dir_all(data_dir).unwrap();
    fs::write(data_dir.join("store.json"), "{ invalid json }}}}").unwrap();

    // Reads fall back to an empty store instead of crashing
    cli()
        .arg("stats")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workouts:  0"));

    // The next write recovers the file
    log_workout(data_dir, "Squats");
    let store = read_store(data_dir);
    assert_eq!(store["workouts"].as_array().unwrap().len(), 1);
}

#[test]
fn test_stats_counts() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    log_workout(data_dir, "Squats");
    log_workout(data_dir, "Deadlifts");
    log_meal(data_dir, "Oats", "300");

    cli()
        .arg("stats")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workouts:  1"))
        .stdout(predicate::str::contains("Exercises: 2"))
        .stdout(predicate::str::contains("Meal days: 1"));
}
