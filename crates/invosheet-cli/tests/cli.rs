use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("invosheet")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("extract"));
}

#[test]
fn extract_rejects_missing_input() {
    Command::cargo_bin("invosheet")
        .unwrap()
        .args(["extract", "no-such-file.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn run_rejects_directory_without_pdfs() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("invosheet")
        .unwrap()
        .args(["run", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no PDF files"));
}

#[test]
fn extract_rejects_unsupported_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoice.docx");
    std::fs::write(&path, b"not a supported input").unwrap();

    Command::cargo_bin("invosheet")
        .unwrap()
        .args(["extract", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));
}
