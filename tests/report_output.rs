//! Runs the compiled binary and checks its stdout contract.

use std::fs;

use assert_cmd::Command;

const EXPECTED: &str = "Price of book Compilers: Principles, Techniques, and Tools 2nd is: 80.00\n";

fn book_report() -> Command {
    let mut cmd = Command::cargo_bin("book-report").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("BOOK_REPORT_ENV")
        .env_remove("BOOK_REPORT_CONFIG_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "book-report exited with {}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_single_report_line() {
    book_report().assert().success().stdout(EXPECTED);
}

#[test]
fn repeated_invocations_are_byte_identical() {
    let first = stdout_of(&mut book_report());
    let second = stdout_of(&mut book_report());
    assert_eq!(first, EXPECTED);
    assert_eq!(first, second);
}

#[test]
fn logs_stay_off_stdout() {
    book_report()
        .env("RUST_LOG", "debug")
        .env("BOOK_REPORT_TELEMETRY__LOG_FORMAT", "json")
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn field_capacity_override_has_no_effect() {
    book_report()
        .env("BOOK_REPORT_REPORT__FIELD_CAPACITY", "10")
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn unknown_environment_still_prints_report() {
    book_report()
        .env("BOOK_REPORT_ENV", "qa")
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn unusable_config_dir_still_prints_report() {
    let dir = std::env::temp_dir().join(format!("book-report-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("base.toml"),
        "[telemetry]\nlog_format = \"xml\"\n\n[report]\nfield_capacity = 10\n",
    )
    .unwrap();

    book_report()
        .env("BOOK_REPORT_CONFIG_DIR", &dir)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn invalid_log_level_still_prints_report() {
    book_report()
        .env("BOOK_REPORT_TELEMETRY__LOG_LEVEL", "book_report=loud")
        .assert()
        .success()
        .stdout(EXPECTED);
}
