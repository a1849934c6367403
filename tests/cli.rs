//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the FINBOARD_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finboard").unwrap();
    cmd.env("FINBOARD_DATA_DIR", dir.path());
    cmd
}

#[test]
fn init_creates_data_files() {
    let dir = TempDir::new().unwrap();

    finboard(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("data/months.json").exists());
    assert!(dir.path().join("data/buckets.json").exists());
}

#[test]
fn dashboard_reflects_recorded_months_and_buckets() {
    let dir = TempDir::new().unwrap();

    finboard(&dir)
        .args([
            "month", "set", "2024-01", "--income", "1000", "--fixed", "300", "--variable", "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 2024-01"));

    finboard(&dir)
        .args(["bucket", "add", "Emergency Fund", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("priority 1"));

    finboard(&dir)
        .args(["dashboard", "--as-of", "2024-01"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Net worth")
                .and(predicate::str::contains("$600.00"))
                .and(predicate::str::contains("Emergency Fund"))
                .and(predicate::str::contains("$500.00")),
        );
}

#[test]
fn month_list_shows_surplus() {
    let dir = TempDir::new().unwrap();

    finboard(&dir)
        .args(["month", "set", "2024-01", "--income", "1000", "--fixed", "250"])
        .assert()
        .success();

    finboard(&dir)
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01").and(predicate::str::contains("$750.00")));
}

#[test]
fn expense_lines_bump_the_variable_aggregate() {
    let dir = TempDir::new().unwrap();

    finboard(&dir)
        .args(["month", "expense", "2024-02", "groceries", "45.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variable total: $45.50"));

    finboard(&dir)
        .args(["month", "expense", "2024-02", "fuel", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variable total: $65.50"));
}

#[test]
fn bucket_withdraw_and_overdraw_surface_on_dashboard() {
    let dir = TempDir::new().unwrap();

    finboard(&dir)
        .args(["bucket", "add", "Vacation", "100"])
        .assert()
        .success();

    // No income recorded, so nothing was ever allocated; the withdrawal
    // overdraws the bucket.
    finboard(&dir)
        .args(["bucket", "withdraw", "Vacation", "40", "--note", "deposit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total withdrawn: $40.00"));

    finboard(&dir)
        .args(["dashboard", "--as-of", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERDRAWN"));
}

#[test]
fn bucket_reorder_renumbers_the_waterfall() {
    let dir = TempDir::new().unwrap();

    finboard(&dir).args(["bucket", "add", "a", "10"]).assert().success();
    finboard(&dir).args(["bucket", "add", "b", "10"]).assert().success();

    finboard(&dir)
        .args(["bucket", "reorder", "b", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New waterfall order"));

    finboard(&dir)
        .args(["bucket", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1\s+b.*2\s+a").unwrap());
}

#[test]
fn export_then_import_round_trips() {
    let dir = TempDir::new().unwrap();
    let archive_path = dir.path().join("archive.json");

    finboard(&dir)
        .args(["month", "set", "2024-01", "--income", "1000"])
        .assert()
        .success();

    finboard(&dir)
        .args(["export", "json"])
        .arg(&archive_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 month records"));

    finboard(&dir)
        .args(["month", "delete", "2024-01"])
        .assert()
        .success();

    finboard(&dir)
        .arg("import")
        .arg(&archive_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 month records"));

    finboard(&dir)
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"));
}

#[test]
fn malformed_import_fails_and_leaves_data_alone() {
    let dir = TempDir::new().unwrap();
    let bad_path = dir.path().join("bad.json");
    std::fs::write(&bad_path, "{ definitely not an archive").unwrap();

    finboard(&dir)
        .args(["month", "set", "2024-01", "--income", "1000"])
        .assert()
        .success();

    finboard(&dir)
        .arg("import")
        .arg(&bad_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));

    finboard(&dir)
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"));
}

#[test]
fn csv_export_writes_month_history() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("months.csv");

    finboard(&dir)
        .args(["month", "set", "2024-01", "--income", "1000", "--fixed", "400"])
        .assert()
        .success();

    finboard(&dir)
        .args(["export", "csv"])
        .arg(&csv_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents.starts_with("Month,Income"));
    assert!(contents.contains("2024-01,1000.00,400.00"));
}

#[test]
fn backup_create_and_restore_latest() {
    let dir = TempDir::new().unwrap();

    finboard(&dir)
        .args(["month", "set", "2024-01", "--income", "1000"])
        .assert()
        .success();

    finboard(&dir)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    finboard(&dir)
        .args(["month", "delete", "2024-01"])
        .assert()
        .success();

    finboard(&dir)
        .args(["backup", "restore", "latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 month records"));
}
