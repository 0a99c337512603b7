use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const HEADER: &str = "text,canonical_form_1,canonical_form_2,canonical_form_3,category_1,category_2,category_3,severity_rating,severity_description";

fn fixture() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_words.csv")
}

#[test]
fn test_cli_writes_files_and_prints_lengths() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("wordlist-codegen").unwrap();
    cmd.arg(fixture()).arg(dir.path());

    // severity: 4, 4, 2; category: 3, 5, 3, 5; word: 1, 1, 1, 1, 1, 1, 1, 1
    cmd.assert()
        .success()
        .stdout(predicate::eq("Total lengths: [1, 2, 3, 4, 5]\n"));

    for name in ["severity.rs", "category.rs", "word.rs"] {
        assert!(dir.path().join(name).is_file(), "{} not written", name);
    }
}

#[test]
fn test_cli_single_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.csv");
    fs::write(&input, format!("{}\nfoo,Bar,,,slur,,,severe,\n", HEADER)).unwrap();

    let output = Command::cargo_bin("wordlist-codegen")
        .unwrap()
        .arg(&input)
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Total lengths: [1, 2]\n");
}

#[test]
fn test_cli_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.csv");
    fs::write(&input, format!("{}\nbroken,row\n", HEADER)).unwrap();

    let mut cmd = Command::cargo_bin("wordlist-codegen").unwrap();
    cmd.arg(&input).arg(dir.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expected 9 fields, found 2"));
    assert!(!dir.path().join("severity.rs").exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("wordlist-codegen").unwrap();
    cmd.arg(dir.path().join("nope.csv")).arg(dir.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_missing_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("wordlist-codegen").unwrap();
    cmd.arg(fixture()).arg(dir.path().join("out"));

    cmd.assert().failure().code(1);
}

#[test]
fn test_cli_requires_two_arguments() {
    let mut cmd = Command::cargo_bin("wordlist-codegen").unwrap();
    cmd.arg(fixture());

    cmd.assert().failure();
}
