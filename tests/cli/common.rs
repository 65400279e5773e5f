//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;

/// A refmark command running in `dir`, blind to the user's config and env.
pub fn refmark_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("refmark");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("REFMARK_BASE_URL")
        .env_remove("REFMARK_VERSION_NUMBER")
        .env_remove("REFMARK_KEYWORDS")
        .env_remove("REFMARK_PROJECT");
    cmd
}

#[test]
fn test_help() {
    cargo_bin_cmd!("refmark")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Refmark finds tracker references"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("refmark")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("refmark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("refmark")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_annotate_help() {
    cargo_bin_cmd!("refmark")
        .args(["annotate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annotate one or more commit messages"));
}

#[test]
fn test_rules_help() {
    cargo_bin_cmd!("refmark")
        .args(["rules", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patterns and link templates"));
}
