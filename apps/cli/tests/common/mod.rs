//! Shared fixtures for the quizmark integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use quiz_core::SchemaKind;
use quizmark::config::Config;

pub const GENERAL_HEADER: &str =
    "Type,Parent Category,Category,C3,C4,C5,C6,Points,Question,Correct,A1,A2,A3,A4\n";

pub const MULTIPLE_CHOICE_HEADER: &str =
    "Type,Parent Category,Category,C3,C4,C5,C6,Question,Correct,A1,A2,A3,A4\n";

/// Write `contents` to `name` inside `dir` and return its path.
pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write csv fixture");
    path
}

/// Config rooted in `root` with `app/` and `home/` folders and no settle delay.
pub fn test_config(root: &Path, schema: SchemaKind, sync: Option<bool>) -> Config {
    Config {
        schema,
        app_dir: root.join("app"),
        home_dir: root.join("home"),
        sync,
        settle_delay: Duration::ZERO,
    }
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
