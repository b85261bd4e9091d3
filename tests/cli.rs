//! Command-line integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use budget_tracker::store::BudgetState;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir.path())
        .env_remove("BUDGET_LOG");
    cmd
}

fn session(dir: &TempDir) -> BudgetState {
    let raw = std::fs::read_to_string(dir.path().join("data").join("session.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Short id of the listed expense with the given name
fn listed_id(dir: &TempDir, name: &str) -> String {
    let output = budget(dir).args(["expense", "list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .filter(|line| line.contains(name))
        .flat_map(|line| line.split_whitespace())
        .find(|token| token.starts_with("exp-"))
        .unwrap()
        .to_string()
}

#[test]
fn commands_require_a_session() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["budget", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("budget init"));
}

#[test]
fn init_add_and_status() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["init", "--budget", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"));

    budget(&dir)
        .args(["expense", "add", "Groceries", "300", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining:").and(predicate::str::contains("$700.00")));

    budget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries").and(predicate::str::contains("Food")));

    let state = session(&dir);
    assert_eq!(state.expenses.len(), 1);
    assert_eq!(state.budget.cents(), 100_000);
}

#[test]
fn over_budget_expense_is_rejected() {
    let dir = TempDir::new().unwrap();
    budget(&dir).args(["init", "--budget", "1000"]).assert().success();
    budget(&dir)
        .args(["expense", "add", "Groceries", "300", "-c", "food"])
        .assert()
        .success();

    budget(&dir)
        .args(["expense", "add", "Laptop", "800", "-c", "misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("remaining budget"));

    assert_eq!(session(&dir).expenses.len(), 1);
}

#[test]
fn invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    budget(&dir).args(["init", "--budget", "100"]).assert().success();

    budget(&dir)
        .args(["expense", "add", "Lunch", "ten", "-c", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    budget(&dir)
        .args(["expense", "add", "Lunch", "10", "-c", "yachts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    budget(&dir)
        .args(["expense", "add", "Lunch", "10", "-c", "food", "-d", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    assert!(session(&dir).expenses.is_empty());
}

#[test]
fn edit_update_flow() {
    let dir = TempDir::new().unwrap();
    budget(&dir).args(["init", "--budget", "1000"]).assert().success();
    budget(&dir)
        .args(["expense", "add", "Groceries", "300", "-c", "food"])
        .assert()
        .success();

    let id = listed_id(&dir, "Groceries");

    budget(&dir)
        .args(["expense", "edit", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Editing expense"));
    assert!(session(&dir).editing_id.is_some());

    budget(&dir)
        .args(["expense", "add", "Other", "5", "-c", "misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("being edited"));

    budget(&dir)
        .args(["expense", "update", "--amount", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$750.00"));

    let state = session(&dir);
    assert_eq!(state.editing_id, None);
    assert_eq!(state.expenses[0].amount.cents(), 25_000);
    assert_eq!(state.expenses[0].expense_name, "Groceries");
}

#[test]
fn update_without_edit_fails() {
    let dir = TempDir::new().unwrap();
    budget(&dir).args(["init", "--budget", "50"]).assert().success();

    budget(&dir)
        .args(["expense", "update", "--amount", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expense is being edited"));
}

#[test]
fn remove_and_reset() {
    let dir = TempDir::new().unwrap();
    budget(&dir).args(["init", "--budget", "1000"]).assert().success();
    budget(&dir)
        .args(["expense", "add", "Gym", "40", "-c", "health"])
        .assert()
        .success();

    let id = listed_id(&dir, "Gym");
    budget(&dir).args(["expense", "edit", &id]).assert().success();
    budget(&dir).args(["expense", "remove", &id]).assert().success();

    let state = session(&dir);
    assert!(state.expenses.is_empty());
    assert_eq!(state.editing_id, None);

    budget(&dir).arg("reset").assert().success();
    assert_eq!(session(&dir), BudgetState::default());
}

#[test]
fn filter_and_audit() {
    let dir = TempDir::new().unwrap();
    budget(&dir).args(["init", "--budget", "1000"]).assert().success();
    budget(&dir)
        .args(["expense", "add", "Bread", "3", "-c", "food"])
        .assert()
        .success();
    budget(&dir)
        .args(["expense", "add", "Pills", "12", "-c", "health"])
        .assert()
        .success();

    budget(&dir).args(["filter", "health"]).assert().success();
    budget(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pills").and(predicate::str::contains("Bread").not()));

    budget(&dir).args(["filter", "--clear"]).assert().success();
    budget(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"));

    budget(&dir)
        .args(["audit", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense").and(predicate::str::contains("UPDATE Budget")));
}
