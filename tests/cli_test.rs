use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn clean_docs() -> Command {
    let mut cmd = Command::cargo_bin("clean-docs").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_sweeps_given_root() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("intro.mdx"), "en").unwrap();
    fs::write(temp_dir.path().join("intro-zh.mdx"), "zh").unwrap();

    clean_docs()
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Localized files:"))
        .stdout(predicate::str::contains("intro-zh.mdx"))
        .stdout(predicate::str::contains("Docs cleanup complete"));

    assert_eq!(fs::read_to_string(temp_dir.path().join("intro.mdx")).unwrap(), "zh");
    assert!(!temp_dir.path().join("intro-zh.mdx").exists());
}

#[test]
fn test_cli_reads_root_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let docs = temp_dir.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("page-zh.mdx"), "zh").unwrap();
    let config_path = temp_dir.path().join("clean-docs.toml");
    fs::write(&config_path, "[sweep]\nroot = \"docs\"\n\n[logging]\nformat = \"json\"\n").unwrap();

    clean_docs().arg("--config").arg(&config_path).assert().success();

    assert!(docs.join("page.mdx").exists());
}

#[test]
fn test_cli_missing_root_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();

    clean_docs()
        .arg("--root")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestion"));
}

#[test]
fn test_cli_invalid_config_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("clean-docs.toml");
    fs::write(&config_path, "[logging]\nformat = \"pretty\"\n").unwrap();

    clean_docs()
        .arg("--config")
        .arg(&config_path)
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.format"));
}

#[test]
fn test_cli_reports_progress_through_logs_only() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("guide.mdx"), "en").unwrap();
    fs::write(temp_dir.path().join("guide-zh.mdx"), "zh").unwrap();

    clean_docs()
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted file:"))
        .stdout(predicate::str::contains("Renamed file:"))
        .stderr(predicate::str::is_empty());
}
