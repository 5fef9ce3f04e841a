mod common;

use std::fs;

use pretty_assertions::assert_eq;
use quiz_core::{parse_frontmatter, ConvertError, Difficulty, SchemaKind};
use quizmark::{convert_to_dirs, AppError};

use common::{file_names, test_config, write_csv, GENERAL_HEADER, MULTIPLE_CHOICE_HEADER};

#[test]
fn general_conversion_writes_both_folders() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = write_csv(
        tmp.path(),
        "quiz.csv",
        &format!(
            "{GENERAL_HEADER}\
             multiplechoice,JavaScript,Basics,,,,,1,What is a closure?,B,A loop,A function with scope,A class\n\
             ,,,,,,,,,,\n\
             matching,JavaScript,,,,,,1,Advanced matching,A,x,y\n"
        ),
    );
    let config = test_config(tmp.path(), SchemaKind::General, None);

    let report = convert_to_dirs(&csv, &config).unwrap();

    assert_eq!(report.created, vec!["001.md", "002.md"]);
    assert_eq!(file_names(&config.app_dir), vec!["001.md", "002.md"]);
    assert_eq!(file_names(&config.home_dir), vec!["001.md", "002.md"]);
    for name in ["001.md", "002.md"] {
        assert_eq!(
            fs::read(config.app_dir.join(name)).unwrap(),
            fs::read(config.home_dir.join(name)).unwrap()
        );
    }

    let first = fs::read_to_string(config.app_dir.join("001.md")).unwrap();
    assert_eq!(
        first,
        "---\n\
         difficulty: 1\n\
         tags: multiplechoice, JavaScript, Basics\n\
         ---\n\
         \n\
         What is a closure?\n\
         \n\
         #\n\
         \n\
         A loop\n\
         \n\
         # Correct\n\
         \n\
         A function with scope\n\
         \n\
         #\n\
         \n\
         A class\n\
         \n"
    );

    let second = parse_frontmatter(&fs::read_to_string(config.app_dir.join("002.md")).unwrap())
        .unwrap();
    assert_eq!(second.difficulty, Difficulty::Advanced);
    assert_eq!(second.tags, vec!["matching", "JavaScript"]);
}

#[test]
fn no_sync_writes_only_app_folder() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = write_csv(
        tmp.path(),
        "quiz.csv",
        &format!("{GENERAL_HEADER}multiplechoice,,,,,,,1,Only?,A,yes\n"),
    );
    let config = test_config(tmp.path(), SchemaKind::General, Some(false));

    convert_to_dirs(&csv, &config).unwrap();

    assert_eq!(file_names(&config.app_dir), vec!["001.md"]);
    assert!(!config.home_dir.exists());
}

#[test]
fn multiple_choice_example_row() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = write_csv(
        tmp.path(),
        "mc.csv",
        &format!(
            "{MULTIPLE_CHOICE_HEADER}\
             multiplechoice,Advanced Topics,Hooks,,,,,What is [b]useState[/b]?,A,Option A text,Option B text\n"
        ),
    );
    let config = test_config(tmp.path(), SchemaKind::MultipleChoice, Some(false));

    convert_to_dirs(&csv, &config).unwrap();

    let content = fs::read_to_string(config.app_dir.join("001.md")).unwrap();
    assert_eq!(
        content,
        "---\n\
         difficulty: 3\n\
         tags: multiplechoice, Advanced Topics, Hooks\n\
         ---\n\
         \n\
         What is **useState**?\n\
         \n\
         # Correct\n\
         \n\
         Option A text\n\
         \n\
         #\n\
         \n\
         Option B text\n\
         \n"
    );
}

#[test]
fn legacy_uses_descriptive_names_in_app_folder_only() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = write_csv(
        tmp.path(),
        "legacy.csv",
        &format!("{GENERAL_HEADER}multiplechoice,React,Props,,,,,1,How do props flow?,A,Down,Up\n"),
    );
    let config = test_config(tmp.path(), SchemaKind::Legacy, None);

    convert_to_dirs(&csv, &config).unwrap();

    assert_eq!(file_names(&config.app_dir), vec!["001_How_do_props_flow_.md"]);
    assert!(!config.home_dir.exists());
    let fm = parse_frontmatter(
        &fs::read_to_string(config.app_dir.join("001_How_do_props_flow_.md")).unwrap(),
    )
    .unwrap();
    assert_eq!(fm.difficulty, Difficulty::Intermediate);
    assert_eq!(fm.tags, vec!["React", "Props"]);
}

#[test]
fn missing_csv_is_reported_before_creating_folders() {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(tmp.path(), SchemaKind::General, None);

    let result = convert_to_dirs(&tmp.path().join("nope.csv"), &config);

    assert!(matches!(
        result,
        Err(AppError::Convert(ConvertError::InputNotFound { .. }))
    ));
    assert!(!config.app_dir.exists());
}

#[test]
fn empty_csv_is_malformed() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = write_csv(tmp.path(), "empty.csv", "");
    let config = test_config(tmp.path(), SchemaKind::General, Some(false));

    let result = convert_to_dirs(&csv, &config);

    assert!(matches!(
        result,
        Err(AppError::Convert(ConvertError::MalformedInput(_)))
    ));
}
