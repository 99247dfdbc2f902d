//! End-to-end tests against the built binary
//!
//! Each test runs in its own data directory via ALLOWANCE_CLI_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn allowance(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("allowance").expect("binary builds");
    cmd.env("ALLOWANCE_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_summary() {
    let dir = TempDir::new().unwrap();

    allowance(&dir)
        .args(["allowance", "--monthly", "5000", "--year", "2025", "--month", "2"])
        .assert()
        .success();

    allowance(&dir)
        .args(["add", "300", "Lunch", "--category", "Food", "--date", "2025-02-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Lunch"));

    allowance(&dir)
        .args(["add", "100", "Bus", "--category", "Transport", "--date", "2025-02-04"])
        .assert()
        .success();

    // 5000 over 20 weekdays = 250/day; 2 days, 400 spent, 20% saved
    allowance(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("400.00"))
        .stdout(predicate::str::contains("20%"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn add_rejects_zero_amount() {
    let dir = TempDir::new().unwrap();

    allowance(&dir)
        .args(["add", "0", "Lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn export_round_trips_through_import() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    allowance(&dir)
        .args(["add", "120.50", "Lunch", "--category", "Food", "--date", "2025-02-03"])
        .assert()
        .success();

    allowance(&dir)
        .args(["export", csv_path.to_str().unwrap()])
        .assert()
        .success();

    let exported = std::fs::read_to_string(&csv_path).unwrap();
    assert!(exported.starts_with("Date,Expense Label,Expense Amount,Category"));
    assert!(exported.contains("2025-02-03,Lunch,120.50,Food"));

    // Import into a fresh data dir
    let dir2 = TempDir::new().unwrap();
    allowance(&dir2)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 record(s)."));

    allowance(&dir2)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn import_with_aliased_headers() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("bank.csv");
    std::fs::write(
        &csv_path,
        "Date,Description,Amount\n2025-02-03,Groceries,250.00\nnot-a-date,Broken,10\n",
    )
    .unwrap();

    allowance(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 record(s)."))
        .stdout(predicate::str::contains("Dropped 1 row(s)"));
}

#[test]
fn import_without_date_column_fails_loudly() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("bad.csv");
    std::fs::write(&csv_path, "Description,Amount\nLunch,10\n").unwrap();

    allowance(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no recognizable Date column"));
}

#[test]
fn reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    allowance(&dir)
        .args(["add", "50", "Lunch", "--date", "2025-02-03"])
        .assert()
        .success();

    allowance(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Refusing"));

    allowance(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 record(s)."));

    allowance(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense records"));
}

#[test]
fn forecast_reports_insufficient_data() {
    let dir = TempDir::new().unwrap();

    allowance(&dir)
        .args(["add", "50", "Lunch", "--date", "2025-02-03"])
        .assert()
        .success();

    allowance(&dir)
        .arg("forecast")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough data"));
}

#[test]
fn corrupt_ledger_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("ledger.json"), "{broken").unwrap();

    allowance(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense records"));
}
