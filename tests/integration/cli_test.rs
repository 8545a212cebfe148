//! End-to-end tests for the ansiprobe binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ansiprobe() -> Command {
    Command::cargo_bin("ansiprobe").expect("binary builds")
}

#[test]
fn missing_device_soft_exits_with_one_diagnostic_line() {
    ansiprobe()
        .args(["--port", "/dev/ansiprobe-missing-device"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Failed to open uart:")
                .and(predicate::function(|out: &str| out.lines().count() == 1)),
        );
}

#[test]
fn dry_run_reports_script_shape() {
    ansiprobe()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("52 writes, 5 pauses"));
}

#[test]
fn dry_run_reports_final_cursor_position() {
    // Step 20 moves 21 columns left of where "11th column" ended and
    // writes a single character, landing the cursor on column 1 of the
    // digit-string row.
    ansiprobe()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("final cursor: row 6, col 1"));
}
