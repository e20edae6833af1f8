use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("course-runtime").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_summary_json_contract() {
    let home = TempDir::new().unwrap();
    let page = home.path().join("page.json");
    fs::write(
        &page,
        serde_json::json!({
            "url": "https://learn.example/p/course",
            "progress": "25%",
            "lectures": ["Intro (6:28)", "Setup [12:00]", "Quiz", "Wrap-up 1h 2m"]
        })
        .to_string(),
    )
    .unwrap();

    let assert = cmd(&home)
        .args(["summary", "--format", "json"])
        .arg(&page)
        .assert()
        .success();
    let report: Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("Output should be valid JSON");

    assert_eq!(report["summary"]["video_count"], 4);
    assert_eq!(report["summary"]["videos_with_time"], 3);
    assert_eq!(report["summary"]["total_seconds"], 4828);
    assert_eq!(report["summary"]["formatted_time"], "1h 20m 28s");
    assert_eq!(report["progress"]["remaining_seconds"], 3621);
    assert_eq!(report["coverage_percent"], 75);
}

#[test]
fn test_summary_text_from_stdin_with_progress_override() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["summary", "--progress", "50%", "--details"])
        .write_stdin("Long lecture (1:00:00)\nQuiz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Video Time: 1h 0m"))
        .stdout(predicate::str::contains("Time Remaining:   30m"))
        .stdout(predicate::str::contains("Coverage: 50%"));
}

#[test]
fn test_summary_no_data_prints_nothing() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["summary", "--progress", "10", "--format", "json"])
        .write_stdin("Quiz only\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing to display"));
}

#[test]
fn test_summary_html_widget() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["summary", "--format", "html"])
        .write_stdin("Intro (6:28)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"id="course-runtime-display""#))
        .stdout(predicate::str::contains("Time Remaining").not());
}

#[test]
fn test_parse_json() {
    let home = TempDir::new().unwrap();

    let assert = cmd(&home)
        .args(["parse", "1h 30m 45s", "90 min", "nothing", "--format", "json"])
        .assert()
        .success();
    let parsed: Vec<Value> = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0]["seconds"], 5445);
    assert_eq!(parsed[1]["seconds"], 5400);
    assert_eq!(parsed[2]["seconds"], 0);
    assert_eq!(parsed[2]["formatted"], "0s");
}

#[test]
fn test_config_get_reads_user_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".course-runtime");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[timing]\nnavigation_delay_ms = 900\n",
    )
    .unwrap();

    cmd(&home)
        .args(["config", "get", "timing.navigation_delay_ms"])
        .assert()
        .success()
        .stdout("900\n");
}

#[test]
fn test_config_defaults_without_file() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .env_remove("RUST_LOG")
        .args(["config", "get", "display.format"])
        .assert()
        .success()
        .stdout("text\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".course-runtime");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[timing]\npoll_interval_ms = 0\n",
    )
    .unwrap();

    cmd(&home)
        .args(["config", "get", "timing.poll_interval_ms"])
        .assert()
        .success()
        .stdout("1000\n")
        .stderr(predicate::str::contains("Warning: Ignoring invalid config"))
        .stderr(predicate::str::contains("Poll interval must be greater than 0"));
}

#[test]
fn test_missing_snapshot_fails() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["summary"])
        .arg(home.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read page snapshot"));
}
