//! Annotate subcommand tests

use crate::common::refmark_in;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_annotate_stdin_to_stdout() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .args(["annotate", "--base-url", "http://tracker.example"])
        .write_stdin("fixes #12")
        .assert()
        .success()
        .stdout("<a href='http://tracker.example/issues/12'>fixes #12</a>");
}

#[test]
fn test_annotate_file() {
    let temp_dir = TempDir::new().unwrap();
    let message = temp_dir.path().join("message.txt");
    fs::write(&message, "refs 1&2\n").unwrap();

    refmark_in(temp_dir.path())
        .args(["annotate", "--base-url", "http://tracker.example/"])
        .arg(&message)
        .assert()
        .success()
        .stdout(
            "<a href='http://tracker.example/issues/1'>refs 1</a>&amp;\
             <a href='http://tracker.example/issues/2'>2</a>\n",
        );

    // Input files are never rewritten
    assert_eq!(fs::read_to_string(&message).unwrap(), "refs 1&2\n");
}

#[test]
fn test_annotate_multiple_files_have_headers() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");
    fs::write(&first, "#1").unwrap();
    fs::write(&second, "Plain text\n").unwrap();

    refmark_in(temp_dir.path())
        .args(["annotate", "--base-url", "http://tracker.example/"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "==> {} <==\n<a href='http://tracker.example/issues/1'>#1</a>\n",
            first.display()
        )))
        .stdout(predicate::str::contains(format!(
            "==> {} <==\nPlain text\n",
            second.display()
        )));
}

#[test]
fn test_annotate_without_base_url_fails() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .arg("annotate")
        .write_stdin("fixes #12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tracker base URL configured"));
}

#[test]
fn test_annotate_no_escape() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .args([
            "annotate",
            "--base-url",
            "http://tracker.example/",
            "--no-escape",
        ])
        .write_stdin("a <b> & #3")
        .assert()
        .success()
        .stdout("a <b> & <a href='http://tracker.example/issues/3'>#3</a>");
}

#[test]
fn test_annotate_escapes_by_default() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .args(["annotate", "--base-url", "http://tracker.example/"])
        .write_stdin("a <b> & c")
        .assert()
        .success()
        .stdout("a &lt;b&gt; &amp; c");
}

#[test]
fn test_annotate_discovers_config_in_parent() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".refmark.toml"),
        "base_url = \"http://tracker.example/redmine\"\nversion_number = \"1.1.0\"\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();

    refmark_in(&nested)
        .arg("annotate")
        .write_stdin("closes 5 6")
        .assert()
        .success()
        .stdout(
            "<a href='http://tracker.example/redmine/issues/show/5'>closes 5</a> \
             <a href='http://tracker.example/redmine/issues/show/6'>6</a>",
        );
}

#[test]
fn test_annotate_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(
        &config,
        "base_url = \"http://tracker.example/\"\nkeywords = \"see\"\n",
    )
    .unwrap();

    refmark_in(temp_dir.path())
        .args(["annotate", "--config"])
        .arg(&config)
        .write_stdin("see 4; not #5")
        .assert()
        .success()
        .stdout("<a href='http://tracker.example/issues/4'>see 4</a>; not #5");
}

#[test]
fn test_annotate_invalid_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "base_url = [").unwrap();

    refmark_in(temp_dir.path())
        .args(["annotate", "--config"])
        .arg(&config)
        .write_stdin("#1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_annotate_flags_override_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("refmark.toml"),
        "base_url = \"http://old.example/\"\n",
    )
    .unwrap();

    refmark_in(temp_dir.path())
        .args(["annotate", "--base-url", "http://new.example/"])
        .write_stdin("#9")
        .assert()
        .success()
        .stdout("<a href='http://new.example/issues/9'>#9</a>");
}

#[test]
fn test_annotate_base_url_from_env() {
    let temp_dir = TempDir::new().unwrap();

    refmark_in(temp_dir.path())
        .arg("annotate")
        .env("REFMARK_BASE_URL", "http://env.example")
        .write_stdin("#9")
        .assert()
        .success()
        .stdout("<a href='http://env.example/issues/9'>#9</a>");
}
