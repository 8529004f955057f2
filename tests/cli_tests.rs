use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finance(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.env("FINANCE_TRACKER_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_calc_prints_log_and_results() {
    let dir = TempDir::new().unwrap();
    finance(&dir)
        .args([
            "calc", "--income", "1000", "--budget", "800", "--goal", "200", "-e", "food=150",
            "-e", "transport=50",
        ])
        .assert()
        .success()
        .stdout(
            "food: Rs150.0\ntransport: Rs50.0\n\
             Remaining budget: Rs600\nSavings progress: Rs800\nSavings goal reached: Yes\n",
        );
}

#[test]
fn test_calc_warns_when_budget_exceeds_income() {
    let dir = TempDir::new().unwrap();
    finance(&dir)
        .args(["calc", "--income", "500", "--budget", "800", "--goal", "100", "-e", "rent=300"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Enter a valid budget (should be less than or equal to income).",
        ))
        .stdout(predicate::str::contains("Remaining budget: Rs500"));
}

#[test]
fn test_calc_rejects_bad_number() {
    let dir = TempDir::new().unwrap();
    finance(&dir)
        .args(["calc", "--income", "lots", "--budget", "800", "--goal", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number for income: 'lots'"));
}

#[test]
fn test_shell_update_income_replaces_expenses() {
    let dir = TempDir::new().unwrap();
    let script = "\
income 1000
budget 800
goal 200
add food 150
income 700
update income
list
log
";
    finance(&dir)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("food: Rs150.0"))
        .stdout(predicate::str::contains("Remaining budget: Rs650"))
        .stdout(predicate::str::contains("Savings progress: Rs550"))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_shell_carry_expenses_keeps_list() {
    let dir = TempDir::new().unwrap();
    let script = "\
income 1000
budget 800
goal 200
add food 150
income 700
update income
";
    finance(&dir)
        .args(["--carry-expenses", "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings progress: Rs550"))
        .stdout(predicate::str::contains("Remaining budget: Rs650\nSavings progress: Rs550"));
}

#[test]
fn test_shell_reports_errors_and_continues() {
    let dir = TempDir::new().unwrap();
    let script = "\
update budget
income abc
budget 800
goal 200
add food 150
frobnicate
income 1000
add food 150
";
    finance(&dir)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Cannot update budget: no finances recorded yet",
        ))
        .stdout(predicate::str::contains("Error: Invalid number for income: 'abc'"))
        .stdout(predicate::str::contains("Error: Unknown command"))
        .stdout(predicate::str::contains("Remaining budget: Rs650"));
}

#[test]
fn test_shell_rejects_totals_beyond_range() {
    let dir = TempDir::new().unwrap();
    let script = "\
income 1000
budget 800
goal 200
add house 1000000000000000
add castle 1000000000000000
add planet 90000000000000000
log
";
    finance(&dir)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Cannot add expense: amounts would exceed the supported range",
        ))
        .stdout(predicate::str::contains(
            "Error: Invalid number for expense amount: '90000000000000000'",
        ))
        .stdout(predicate::str::contains("house: Rs1000000000000000.0\n"))
        .stdout(predicate::str::contains("castle: Rs").not());
}

#[test]
fn test_shell_runs_script_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("week.txt");
    std::fs::write(
        &script,
        "# weekly figures\nincome 200\nbudget 100\ngoal 50\nadd snacks 20.5\nshow\n",
    )
    .unwrap();

    finance(&dir)
        .args(["shell", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("snacks: Rs20.5"))
        .stdout(predicate::str::contains("Remaining budget: Rs79.5"));
}

#[test]
fn test_init_writes_config() {
    let dir = TempDir::new().unwrap();
    finance(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"currency_symbol\": \"Rs\""));
    assert!(contents.contains("\"carry_expenses_on_update\": false"));
}

#[test]
fn test_config_reads_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "$", "carry_expenses_on_update": true}"#,
    )
    .unwrap();

    finance(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:  $"))
        .stdout(predicate::str::contains("Carry expenses:   true"))
        .stdout(predicate::str::contains("Log level:        warn"))
        .stdout(predicate::str::contains("Update policy:    Preserve"));
}
