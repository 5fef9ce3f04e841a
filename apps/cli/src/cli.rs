use std::path::PathBuf;

use clap::Parser;
use quiz_core::SchemaKind;

pub const USAGE: &str = "Usage: quizmark <csv_file>";

#[derive(Debug, Parser)]
#[command(name = "quizmark", version)]
#[command(about = "Convert a quiz CSV export into Markdown question files and keep them mirrored.")]
pub struct Cli {
    /// CSV export to convert (first row is a header).
    pub csv_file: PathBuf,

    /// Row schema of the export: general, legacy or multiple-choice.
    #[arg(long)]
    pub schema: Option<SchemaKind>,

    /// Output folder (default: markdown_questions).
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// Mirror folder (default: ~/Documents/my_markdown_files).
    #[arg(long)]
    pub home_dir: Option<PathBuf>,

    /// Write only to the app folder and exit after converting.
    #[arg(long)]
    pub no_sync: bool,
}
