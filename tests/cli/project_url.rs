//! Project-url subcommand tests

use crate::common::refmark_in;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_project_url_from_flags() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .args([
            "project-url",
            "--base-url",
            "http://tracker.example",
            "--project",
            "refmark",
        ])
        .assert()
        .success()
        .stdout("http://tracker.example/projects/refmark\n");
}

#[test]
fn test_project_url_from_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("refmark.toml"),
        "base_url = \"http://tracker.example/\"\nproject = \"core\"\n",
    )
    .unwrap();

    refmark_in(temp_dir.path())
        .arg("project-url")
        .assert()
        .success()
        .stdout("http://tracker.example/projects/core\n");
}

#[test]
fn test_project_url_requires_project() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .args(["project-url", "--base-url", "http://tracker.example/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tracker project configured"));
}
