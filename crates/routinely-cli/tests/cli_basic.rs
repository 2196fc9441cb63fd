//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against `data_dir` and return (stdout, stderr, code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "routinely-cli", "--"])
        .args(args)
        .env("ROUTINELY_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn routine_add_list_toggle_delete() {
    let tmp = tempfile::tempdir().unwrap();

    let (stdout, stderr, code) = run_cli(
        tmp.path(),
        &["routine", "add", "Drink water", "--time", "any time"],
    );
    assert_eq!(code, 0, "add failed: {stderr}");
    assert!(stdout.contains("Routine created:"));

    let (stdout, _, code) = run_cli(tmp.path(), &["routine", "list"]);
    assert_eq!(code, 0);
    let routines: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let routines = routines.as_array().unwrap();
    assert_eq!(routines.len(), 1);
    assert_eq!(routines[0]["completedToday"], false);
    assert_eq!(routines[0]["streak"], 0);

    let id = routines[0]["id"].as_str().unwrap();
    let (stdout, _, code) = run_cli(tmp.path(), &["routine", "toggle", id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("streak 1"));

    let (stdout, _, code) = run_cli(tmp.path(), &["routine", "delete", id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Routine deleted:"));
}

#[test]
fn routine_add_rejects_blank_title() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(tmp.path(), &["routine", "add", "   "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "stderr was: {stderr}");
}

#[test]
fn routine_add_rejects_malformed_time() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, stderr, code) =
        run_cli(tmp.path(), &["routine", "add", "Run", "--time", "25:00"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "stderr was: {stderr}");
}

#[test]
fn list_by_time_orders_any_time_last() {
    let tmp = tempfile::tempdir().unwrap();
    run_cli(tmp.path(), &["routine", "add", "Nine", "--time", "09:00"]);
    run_cli(tmp.path(), &["routine", "add", "Whenever", "--time", "any time"]);
    run_cli(tmp.path(), &["routine", "add", "Early", "--time", "07:30"]);

    let (stdout, _, code) = run_cli(tmp.path(), &["routine", "list", "--by-time"]);
    assert_eq!(code, 0);
    let routines: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let titles: Vec<_> = routines
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["Early", "Nine", "Whenever"]);
}

#[test]
fn stats_show_reports_completion_rate() {
    let tmp = tempfile::tempdir().unwrap();
    for title in ["A", "B", "C", "D"] {
        run_cli(tmp.path(), &["routine", "add", title]);
    }
    let (stdout, _, _) = run_cli(tmp.path(), &["routine", "list"]);
    let routines: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = routines[0]["id"].as_str().unwrap();
    run_cli(tmp.path(), &["routine", "toggle", id]);

    let (stdout, _, code) = run_cli(tmp.path(), &["stats", "show"]);
    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["totalRoutines"], 4);
    assert_eq!(report["completedToday"], 1);
    assert_eq!(report["completionRate"], 25);
}

#[test]
fn theme_set_and_show() {
    let tmp = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        tmp.path(),
        &["theme", "set", "--color", "purple", "--mode", "dark"],
    );
    assert_eq!(code, 0);
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["primaryColor"], "262 83% 58%");
    assert_eq!(settings["theme"], "dark");

    let (stdout, _, code) = run_cli(tmp.path(), &["theme", "show"]);
    assert_eq!(code, 0);
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["theme"], "dark");
}
