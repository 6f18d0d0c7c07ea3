use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("arkchat")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("agents"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_agents_help_shows_subcommands() {
    cargo_bin_cmd!("arkchat")
        .args(["agents", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"));
}

#[test]
fn test_agents_create_help_shows_flags() {
    cargo_bin_cmd!("arkchat")
        .args(["agents", "create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--description"))
        .stdout(predicate::str::contains("--system-prompt"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("arkchat")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
