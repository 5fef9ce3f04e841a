//! Runtime configuration.
//!
//! Read from the environment (after an optional `.env` file), then
//! overridden by command-line flags.
//!
//! | variable             | default                          |
//! |----------------------|----------------------------------|
//! | `QUIZMARK_SCHEMA`    | `general`                        |
//! | `QUIZMARK_APP_DIR`   | `markdown_questions`             |
//! | `QUIZMARK_HOME_DIR`  | `~/Documents/my_markdown_files`  |
//! | `QUIZMARK_SYNC`      | schema default                   |
//! | `QUIZMARK_SETTLE_MS` | `100`                            |

use std::path::{Path, PathBuf};
use std::time::Duration;

use quiz_core::{RowSchema, SchemaKind};

use crate::cli::Cli;
use crate::error::{AppError, Result};

pub const DEFAULT_APP_DIR: &str = "markdown_questions";
pub const DEFAULT_SETTLE_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub schema: SchemaKind,
    pub app_dir: PathBuf,
    pub home_dir: PathBuf,
    /// Explicit run mode; `None` follows the schema's default.
    pub sync: Option<bool>,
    pub settle_delay: Duration,
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let schema = match lookup("QUIZMARK_SCHEMA") {
            Some(value) => value
                .parse::<SchemaKind>()
                .map_err(|e| AppError::Config(e.to_string()))?,
            None => SchemaKind::default(),
        };

        let app_dir = lookup("QUIZMARK_APP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_DIR));

        let home_dir = lookup("QUIZMARK_HOME_DIR")
            .map(|value| expand_home(&value))
            .unwrap_or_else(default_home_dir);

        let sync = lookup("QUIZMARK_SYNC")
            .map(|value| parse_bool(&value))
            .transpose()?;

        let settle_ms = match lookup("QUIZMARK_SETTLE_MS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("QUIZMARK_SETTLE_MS must be milliseconds, got '{value}'"))
            })?,
            None => DEFAULT_SETTLE_MS,
        };

        Ok(Self {
            schema,
            app_dir,
            home_dir,
            sync,
            settle_delay: Duration::from_millis(settle_ms),
        })
    }

    /// Apply command-line overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(schema) = cli.schema {
            self.schema = schema;
        }
        if let Some(dir) = &cli.app_dir {
            self.app_dir = dir.clone();
        }
        if let Some(dir) = &cli.home_dir {
            self.home_dir = dir.clone();
        }
        if cli.no_sync {
            self.sync = Some(false);
        }
    }

    pub fn row_schema(&self) -> RowSchema {
        self.schema.schema()
    }

    /// Whether files go to both folders and the mirror runs afterwards.
    pub fn mirrored(&self) -> bool {
        self.sync.unwrap_or_else(|| self.row_schema().mirrored)
    }

    /// Folders that receive converted files.
    pub fn output_dirs(&self) -> Vec<PathBuf> {
        if self.mirrored() {
            vec![self.app_dir.clone(), self.home_dir.clone()]
        } else {
            vec![self.app_dir.clone()]
        }
    }
}

fn default_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("my_markdown_files")
}

fn expand_home(value: &str) -> PathBuf {
    match value.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Path::new(rest)),
        None => PathBuf::from(value),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "QUIZMARK_SYNC must be true or false, got '{other}'"
        ))),
    }
}
