mod common;

use common::TestEnv;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("20250301_0001_create_kv_store"));

    assert!(std::path::Path::new(&env.db_path).exists());
}

#[test]
fn test_full_day_through_the_cli() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .arg("entry")
        .assert()
        .success()
        .stdout(contains("Entry marked at"))
        .stdout(contains("Expected exit after 6 h"));

    env.cmd()
        .arg("entry")
        .assert()
        .failure()
        .stderr(contains("already marked entry"));

    env.cmd()
        .args(["exit", "--company", "Acme & Co", "--comment", "all good"])
        .assert()
        .success()
        .stdout(contains("Exit marked at"))
        .stdout(contains("Total duration"));

    env.cmd()
        .arg("exit")
        .assert()
        .failure()
        .stderr(contains("already marked exit"));

    env.cmd()
        .arg("submit")
        .assert()
        .success()
        .stdout(contains("usp=pp_url"))
        .stdout(contains("Acme+%26+Co"))
        .stdout(contains("all+good"))
        .stdout(contains("embedded=true"));

    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("form link issued"));

    env.cmd()
        .args(["submit", "--done"])
        .assert()
        .success()
        .stdout(contains("submitted for today"));

    env.cmd()
        .arg("entry")
        .assert()
        .failure()
        .stderr(contains("already submitted"));

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("entry"))
        .stdout(contains("submitted"));
}

#[test]
fn test_exit_before_entry_fails() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .arg("exit")
        .assert()
        .failure()
        .stderr(contains("mark entry first"));
}

#[test]
fn test_abandon_returns_to_entered() {
    let env = TestEnv::new();
    env.init();

    env.cmd().arg("entry").assert().success();
    env.cmd().arg("exit").assert().success();

    env.cmd()
        .args(["submit", "--done"])
        .assert()
        .failure()
        .stderr(contains("has not been built"));

    env.cmd().arg("submit").assert().success();
    env.cmd()
        .args(["submit", "--abandon"])
        .assert()
        .success()
        .stdout(contains("exit reverted"));

    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("(entered)"));

    env.cmd().arg("exit").assert().success();
}

#[test]
fn test_cancel_pending_exit() {
    let env = TestEnv::new();
    env.init();

    env.cmd().arg("entry").assert().success();
    env.cmd().arg("exit").assert().success();
    env.cmd()
        .args(["submit", "--cancel"])
        .assert()
        .success()
        .stdout(contains("cancelled"));

    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("(entered)"));
}

#[test]
fn test_conflicting_submit_flags_are_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["submit", "--done", "--abandon"])
        .assert()
        .failure();
}

#[test]
fn test_entry_with_explicit_time() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["entry", "--at", "2000-01-01T09:00:00Z"])
        .assert()
        .success()
        .stdout(contains("01/01/2000"));

    env.cmd()
        .arg("entry")
        .assert()
        .failure()
        .stderr(contains("already marked entry"));
}

#[test]
fn test_entry_with_invalid_time_fails() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["entry", "--at", "soon"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_status_before_any_entry() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("(no entry)"))
        .stdout(contains("--:--"))
        .stdout(contains("officelog entry"));
}

#[test]
fn test_reset_clears_today() {
    let env = TestEnv::new();
    env.init();

    env.cmd().arg("entry").assert().success();
    env.cmd()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry log cleared"));
    env.cmd().arg("entry").assert().success();
}

#[test]
fn test_todo_list_and_edits() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .arg("todo")
        .assert()
        .success()
        .stdout(contains("Send morning emails"))
        .stdout(contains("End of day summary"));

    env.cmd()
        .args(["todo", "--add", "  Write report  ", "--time", "11:15", "--list"])
        .assert()
        .success()
        .stdout(contains("Added \"Write report\" at 11:15"))
        .stdout(contains("11:15"))
        .stdout(contains("[ ] \x1b[0mWrite report"));

    env.cmd()
        .args(["todo", "--add", "   "])
        .assert()
        .failure()
        .stderr(contains("Please enter a todo description"));

    env.cmd()
        .args(["todo", "--toggle", "1", "--list"])
        .assert()
        .success()
        .stdout(contains("Marked as completed"))
        .stdout(contains("[x]"));

    env.cmd()
        .args(["todo", "--del", "3"])
        .assert()
        .success()
        .stdout(contains("Deleted \"Write report\""));

    env.cmd()
        .args(["todo", "--toggle", "42"])
        .assert()
        .failure()
        .stderr(contains("Todo not found"));

    env.cmd()
        .args(["todo", "--clear", "--yes", "--list"])
        .assert()
        .success()
        .stdout(contains("restored to defaults"))
        .stdout(contains("Send morning emails"))
        .stdout(contains("[x]").not());
}

#[test]
fn test_todo_set_requires_time() {
    let env = TestEnv::new();
    env.cmd().args(["todo", "--set", "1"]).assert().failure();
}

#[test]
fn test_todo_time_alone_is_rejected() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["todo", "--time", "10:00"])
        .assert()
        .failure()
        .stderr(contains("--add"));

    env.cmd()
        .args(["todo", "--time", "10:00", "--list"])
        .assert()
        .failure();

    env.cmd()
        .args(["todo", "--set", "2", "--time", "8:15", "--list"])
        .assert()
        .success()
        .stdout(contains("Time updated to 08:15."));
}

#[test]
fn test_todo_list_is_available_before_entry() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("(no entry)"));
    env.cmd()
        .arg("todo")
        .assert()
        .success()
        .stdout(contains("Team standup meeting"));
}

#[test]
fn test_settings_update_and_validation() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .arg("settings")
        .assert()
        .success()
        .stdout(contains("6"))
        .stdout(contains("18:00"));

    env.cmd()
        .args(["settings", "--work-hours", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid work hours"));

    env.cmd()
        .args(["settings", "--work-hours", "8.5", "--exit-time", "7:30"])
        .assert()
        .success()
        .stdout(contains("8.5"))
        .stdout(contains("07:30"));

    env.cmd()
        .arg("entry")
        .assert()
        .success()
        .stdout(contains("Expected exit after 8.5 h"));
}

#[test]
fn test_db_info_and_check() {
    let env = TestEnv::new();
    env.init();
    env.cmd().arg("entry").assert().success();

    env.cmd()
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("office_entry_log"))
        .stdout(contains("20250301_0001_create_kv_store"))
        .stdout(contains("Integrity check passed"));
}
