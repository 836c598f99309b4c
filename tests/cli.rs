use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fundcheck_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fundcheck").unwrap();
    cmd.env("FUNDCHECK_DATA_DIR", data_dir.path());
    cmd
}

fn create_account(data_dir: &TempDir, name: &str, balance: &str) {
    fundcheck_cmd(data_dir)
        .args(["account", "create", name, "--balance", balance])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Created account: {}", name)));
}

#[test]
fn check_against_literal_balance() {
    let dir = TempDir::new().unwrap();

    fundcheck_cmd(&dir)
        .args(["check", "100", "--balance", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sufficient funds"));

    fundcheck_cmd(&dir)
        .args(["check", "100", "--balance", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sufficient funds"));

    fundcheck_cmd(&dir)
        .args(["check", "100", "--balance", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Insufficient funds (missing $60.00)"));
}

#[test]
fn check_rejects_non_positive_amounts() {
    let dir = TempDir::new().unwrap();

    for amount in ["0", "-5"] {
        fundcheck_cmd(&dir)
            .args(["check", amount, "--balance", "1000"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument"));
    }
}

#[test]
fn check_against_stored_account() {
    let dir = TempDir::new().unwrap();
    create_account(&dir, "Checking", "40");

    fundcheck_cmd(&dir)
        .args(["check", "100", "--account", "checking", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"insufficient\""))
        .stdout(predicate::str::contains("\"missing_amount\": 60.0"));
}

#[test]
fn strict_check_fails_when_insufficient() {
    let dir = TempDir::new().unwrap();
    create_account(&dir, "Wallet", "10");

    fundcheck_cmd(&dir)
        .args(["check", "25", "--account", "Wallet", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing $15.00"));

    fundcheck_cmd(&dir)
        .args(["check", "5", "--account", "Wallet", "--strict"])
        .assert()
        .success();
}

#[test]
fn check_unknown_account_fails() {
    let dir = TempDir::new().unwrap();

    fundcheck_cmd(&dir)
        .args(["check", "10", "--account", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: Ghost"));
}

#[test]
fn account_lifecycle() {
    let dir = TempDir::new().unwrap();
    create_account(&dir, "Savings", "$1,000");

    fundcheck_cmd(&dir)
        .args(["account", "set-balance", "Savings", "250.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00 -> $250.50"));

    fundcheck_cmd(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings"))
        .stdout(predicate::str::contains("$250.50"));

    fundcheck_cmd(&dir)
        .args(["account", "rename", "savings", "Rainy Day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed account: Savings -> Rainy Day"));

    fundcheck_cmd(&dir)
        .args(["account", "delete", "Rainy Day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted account: Rainy Day"));

    fundcheck_cmd(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found."));

    let history = std::fs::read_to_string(dir.path().join("history.jsonl")).unwrap();
    assert_eq!(history.lines().count(), 4);

    fundcheck_cmd(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings  opened with $1000.00"))
        .stdout(predicate::str::contains("balance $1000.00 -> $250.50"))
        .stdout(predicate::str::contains("renamed from Savings to Rainy Day"))
        .stdout(predicate::str::contains("Rainy Day  deleted at $250.50"));
}

#[test]
fn history_for_one_account() {
    let dir = TempDir::new().unwrap();
    create_account(&dir, "Checking", "10");
    create_account(&dir, "Wallet", "5");

    fundcheck_cmd(&dir)
        .args(["history", "--account", "wallet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wallet  opened with $5.00"))
        .stdout(predicate::str::contains("Checking").not());

    fundcheck_cmd(&dir)
        .args(["history", "--account", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: Ghost"));
}

#[test]
fn duplicate_account_is_rejected() {
    let dir = TempDir::new().unwrap();
    create_account(&dir, "Checking", "0");

    fundcheck_cmd(&dir)
        .args(["account", "create", "CHECKING"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn check_rejects_text_around_amounts() {
    let dir = TempDir::new().unwrap();

    for amount in ["five 5", "abc5", "NaN5"] {
        fundcheck_cmd(&dir)
            .args(["check", amount, "--balance", "3"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"));
    }
}

#[test]
fn literal_balance_check_needs_no_home() {
    let mut cmd = Command::cargo_bin("fundcheck").unwrap();
    cmd.env_remove("FUNDCHECK_DATA_DIR")
        .env_remove("HOME")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("APPDATA")
        .args(["check", "100", "--balance", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sufficient funds"));
}

#[test]
fn checks_create_no_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("unused");

    Command::cargo_bin("fundcheck")
        .unwrap()
        .env("FUNDCHECK_DATA_DIR", &root)
        .args(["check", "10", "--balance", "5"])
        .assert()
        .success();

    Command::cargo_bin("fundcheck")
        .unwrap()
        .env("FUNDCHECK_DATA_DIR", &root)
        .args(["check", "10", "--account", "Checking"])
        .assert()
        .failure();

    assert!(!root.exists());
}

#[test]
fn yaml_check_output() {
    let dir = TempDir::new().unwrap();

    fundcheck_cmd(&dir)
        .args(["check", "100", "--balance", "40", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outcome: insufficient"))
        .stdout(predicate::str::contains("missing_amount: 60.0"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    fundcheck_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized fundcheck"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("accounts.json").exists());

    fundcheck_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}
