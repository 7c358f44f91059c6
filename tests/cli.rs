//! CLI smoke tests
//!
//! Exercises the binary's subcommands against a throwaway data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studesk(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studesk").unwrap();
    cmd.env("STUDESK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn help_describes_the_dashboard() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("student dashboard"));
}

#[test]
fn no_subcommand_prints_hint() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("studesk tui"));
}

#[test]
fn config_shows_paths_and_settings() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Studesk Configuration"))
        .stdout(predicate::str::contains("Signed in: no"));
}

#[test]
fn attendance_prints_month_summary() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["attendance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attendance - "))
        .stdout(predicate::str::contains("Overall:"));
}

#[test]
fn attendance_rejects_out_of_range_month() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["attendance", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 12"));
}

#[test]
fn grades_with_averages_lists_subjects() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["grades", "--averages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grades - "))
        .stdout(predicate::str::contains("Subject averages"));
}

#[test]
fn homework_list_shows_tasks_header() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["homework", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Homework & Tasks"));
}

#[test]
fn homework_toggle_unknown_id_is_a_noop() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["homework", "toggle", "hw-doesnotexist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn reports_filter_by_kind() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["reports", "--kind", "attendance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attendance Report"));
}

#[test]
fn export_json_emits_versioned_document() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("schema_version"));
}

#[test]
fn export_csv_requires_kind() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["export", "--format", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --kind"));
}

#[test]
fn export_csv_attendance_has_header() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .args(["export", "--format", "csv", "--kind", "attendance"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Date,Day,Subject,Status"));
}

#[test]
fn logout_without_session_succeeds() {
    let temp = TempDir::new().unwrap();
    studesk(&temp)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));
}
