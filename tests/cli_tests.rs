use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

// Helper function to set up a test Command instance against a fresh journal
fn set_up_command() -> (Command, TempDir) {
    let temp_dir = tempdir().unwrap();
    let cmd = command_for(temp_dir.path());
    (cmd, temp_dir)
}

fn command_for(journal_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    cmd.env_clear()
        .env("HOME", journal_dir)
        .env("JOT_DIR", journal_dir);
    // Keep the binary's notion of "today" in line with this process
    if let Ok(tz) = std::env::var("TZ") {
        cmd.env("TZ", tz);
    }
    cmd
}

fn today_note(journal_dir: &Path) -> std::path::PathBuf {
    journal_dir.join(format!("{}.md", Local::now().format("%Y-%m-%d")))
}

#[test]
fn test_cli_add_and_list() {
    let (mut cmd, temp_dir) = set_up_command();
    cmd.args(["-t", "9:30", "Planning", "session"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: - 09:30 Planning session"));

    let content = fs::read_to_string(today_note(temp_dir.path())).unwrap();
    assert!(content.contains("## Today\n- 09:30 Planning session\n"));

    command_for(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("09:30  Planning session"));
}

#[test]
fn test_cli_orders_entries() {
    let (_, temp_dir) = set_up_command();
    for (time, message) in [("14:00", "C"), ("09:00", "A"), ("11:30", "B")] {
        command_for(temp_dir.path())
            .args(["--time", time, message])
            .assert()
            .success();
    }

    command_for(temp_dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout("09:00  A\n11:30  B\n14:00  C\n");
}

#[test]
fn test_cli_add_uses_current_time() {
    let (mut cmd, temp_dir) = set_up_command();
    cmd.arg("now").assert().success();

    let content = fs::read_to_string(today_note(temp_dir.path())).unwrap();
    let entry_line = content
        .lines()
        .find(|line| line.ends_with(" now"))
        .expect("entry line should be present");
    assert!(
        predicate::str::is_match(r"^- [0-9]{2}:[0-9]{2} now$")
            .unwrap()
            .eval(entry_line),
        "unexpected entry line: {}",
        entry_line
    );
}

#[test]
fn test_cli_undo() {
    let (_, temp_dir) = set_up_command();
    for (time, message) in [("09:00", "A"), ("11:30", "B"), ("14:00", "C")] {
        command_for(temp_dir.path())
            .args(["-t", time, message])
            .assert()
            .success();
    }

    command_for(temp_dir.path())
        .arg("-u")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: - 14:00 C"));

    command_for(temp_dir.path())
        .assert()
        .success()
        .stdout("09:00  A\n11:30  B\n");
}

#[test]
fn test_cli_list_empty_day() {
    let (mut cmd, _temp_dir) = set_up_command();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No entries for"));
}

#[test]
fn test_cli_undo_without_entries() {
    let (mut cmd, _temp_dir) = set_up_command();
    cmd.arg("--undo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Nothing to undo: no note found"));
}

#[test]
fn test_cli_help() {
    let (mut cmd, _temp_dir) = set_up_command();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--undo"))
        .stdout(predicate::str::contains("--time"));
}

#[test]
fn test_cli_unknown_option() {
    let (mut cmd, temp_dir) = set_up_command();
    cmd.args(["hello", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown option: --bogus"))
        .stderr(predicate::str::contains("Hint: Run 'jot --help'"));

    assert!(!today_note(temp_dir.path()).exists());
}

#[test]
fn test_cli_invalid_time() {
    let (mut cmd, temp_dir) = set_up_command();
    cmd.args(["-t", "25:30", "late"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time format: '25:30'"));

    assert!(!today_note(temp_dir.path()).exists());
}

#[test]
fn test_cli_time_without_message() {
    let (mut cmd, _temp_dir) = set_up_command();
    cmd.args(["-t", "10:00"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_cli_time_without_value() {
    let (mut cmd, _temp_dir) = set_up_command();
    cmd.args(["message", "-t"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_cli_missing_journal_dir() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("nope");

    command_for(&missing)
        .args(["-t", "10:00", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Journal directory not found"));

    assert!(!missing.exists());
}

#[test]
fn test_cli_header_not_found() {
    let (mut cmd, temp_dir) = set_up_command();
    let note = today_note(temp_dir.path());
    let original = "# Notes\n\n## Meetings\n";
    fs::write(&note, original).unwrap();

    cmd.args(["-t", "10:00", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Header '## Today' not found"))
        .stderr(predicate::str::contains("Hint:"))
        .stderr(predicate::str::contains("JOT_HEADER"));

    assert_eq!(fs::read_to_string(&note).unwrap(), original);
}

#[test]
fn test_cli_custom_header() {
    let (mut cmd, temp_dir) = set_up_command();
    let note = today_note(temp_dir.path());
    fs::write(&note, "# Notes\n\n## Log\n\n## Meetings\n").unwrap();

    cmd.env("JOT_HEADER", "## Log")
        .args(["-t", "10:00", "hello"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&note).unwrap(),
        "# Notes\n\n## Log\n- 10:00 hello\n\n## Meetings\n"
    );
}

#[test]
fn test_cli_verbose_logs_to_stderr_only() {
    let (mut cmd, _temp_dir) = set_up_command();
    cmd.args(["--verbose", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries for"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
}
