//! Rules subcommand tests

use crate::common::refmark_in;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_rules_default() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("reference\n  pattern: (?i)"))
        .stdout(predicate::str::contains("IssueID "))
        .stdout(predicate::str::contains("  href:    issues/$1"))
        .stdout(predicate::str::contains("wiki\n"))
        .stdout(predicate::str::contains("  href:    wiki/$1$2"));
}

#[test]
fn test_rules_legacy_version() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .args(["rules", "--version-number", "1.1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  href:    issues/show/$1"));
}

#[test]
fn test_rules_custom_keywords() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .args(["rules", "--keywords", "see, resolves"])
        .assert()
        .success()
        .stdout(predicate::str::contains("see "))
        .stdout(predicate::str::contains("resolves "))
        .stdout(predicate::str::contains("IssueID").not());
}
