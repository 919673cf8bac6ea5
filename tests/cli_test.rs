/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{LogDirBuilder, RecordBuilder, realistic_log_dir, realistic_log_file};
use predicates::prelude::*;
use serde_json::{Value, json};

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_cli_summarizes_file() {
    let dir = realistic_log_dir();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    let output = cmd.arg(realistic_log_file(&dir)).assert().success().get_output().clone();

    let report = stdout_json(&output);
    assert_eq!(report["lineCount"], json!(2));
    assert_eq!(report["entryCount"], json!(2));
    assert_eq!(report["errors"], json!([]));
    assert_eq!(report["entries"][1]["toolCalls"][1]["toolCallId"], json!("call-3"));
}

#[test]
fn test_cli_missing_path_fails_with_report() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    cmd.arg("/nonexistent/chat.jsonl")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""error":"path_not_found""#))
        .stdout(predicate::str::contains("/nonexistent/chat.jsonl"));
}

#[test]
fn test_cli_partial_corruption_still_succeeds() {
    let good = RecordBuilder::new().to_json();
    let dir = LogDirBuilder::new()
        .with_file("chat.jsonl", &format!("{good}\ninvalid line\n{good}"))
        .build();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    let output = cmd
        .arg(dir.path().join("chat.jsonl"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to parse line 2"))
        .get_output()
        .clone();

    let report = stdout_json(&output);
    assert_eq!(report["errors"][0]["line"], json!(2));
    assert_eq!(report["entryCount"], json!(2));
}

#[test]
fn test_cli_directory_lists_files() {
    let dir = LogDirBuilder::new()
        .with_file("a.jsonl", "{}")
        .with_file("b.jsonl", "{}")
        .with_file("nested/c.jsonl", "{}")
        .build();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    let output = cmd.arg(dir.path()).assert().success().get_output().clone();

    let report = stdout_json(&output);
    assert_eq!(report["isDirectory"], json!(true));
    let files: Vec<&str> = report["jsonlFiles"]
        .as_array()
        .expect("jsonlFiles should be an array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a.jsonl"));
    assert!(files[1].ends_with("b.jsonl"));
}

#[test]
fn test_cli_max_chars_option() {
    let dir = LogDirBuilder::new()
        .with_records("chat.jsonl", &[RecordBuilder::new().system_prompt("abcdefghij")])
        .build();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    let output = cmd
        .arg(dir.path().join("chat.jsonl"))
        .args(["--max-chars", "3"])
        .assert()
        .success()
        .get_output()
        .clone();

    let report = stdout_json(&output);
    assert_eq!(report["entries"][0]["systemPromptPreview"], json!("abc...(truncated)"));
}

#[test]
fn test_cli_compact_flag_prints_one_line() {
    let dir = realistic_log_dir();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    let output =
        cmd.arg(realistic_log_file(&dir)).arg("--compact").assert().success().get_output().clone();

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_cli_tilde_path_is_expanded() {
    let home = tempfile::TempDir::new().unwrap();
    std::fs::write(home.path().join("chat.jsonl"), RecordBuilder::new().to_json()).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    let output =
        cmd.env("HOME", home.path()).arg("~/chat.jsonl").assert().success().get_output().clone();

    let report = stdout_json(&output);
    assert_eq!(report["entryCount"], json!(1));
    assert_eq!(report["path"], json!(home.path().join("chat.jsonl")));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summarize chat history JSONL"))
        .stdout(predicate::str::contains("--max-chars"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_requires_path_argument() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chat-history-summarizer"));
    cmd.assert().failure();
}
