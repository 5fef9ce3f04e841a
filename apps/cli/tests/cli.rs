mod common;

use std::process::Command;

use common::{file_names, write_csv, GENERAL_HEADER};

fn quizmark() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quizmark"));
    cmd.env_remove("QUIZMARK_SCHEMA")
        .env_remove("QUIZMARK_APP_DIR")
        .env_remove("QUIZMARK_HOME_DIR")
        .env_remove("QUIZMARK_SYNC")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn missing_argument_prints_usage_and_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let output = quizmark().current_dir(tmp.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: quizmark <csv_file>"), "{stderr}");
}

#[test]
fn missing_file_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let output = quizmark()
        .current_dir(tmp.path())
        .arg("nope.csv")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: file 'nope.csv' not found"), "{stderr}");
}

#[test]
fn converts_without_sync_and_exits_0() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = write_csv(
        tmp.path(),
        "quiz.csv",
        &format!(
            "{GENERAL_HEADER}\
             multiplechoice,JS,,,,,,1,First?,A,yes,no\n\
             multiplechoice,JS,,,,,,1,Second?,B,no,yes\n"
        ),
    );

    let output = quizmark()
        .current_dir(tmp.path())
        .arg(&csv)
        .arg("--no-sync")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created 001.md"), "{stdout}");
    assert!(stdout.contains("Created 002.md"), "{stdout}");
    assert!(stdout.contains("Conversion complete!"), "{stdout}");
    assert_eq!(
        file_names(&tmp.path().join("markdown_questions")),
        vec!["001.md", "002.md"]
    );
}
