use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use quizmark::cli::{Cli, USAGE};
use quizmark::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("{e}");
            let usage = AppError::Usage(USAGE.to_string());
            eprintln!("{usage}");
            return ExitCode::from(usage.exit_code());
        }
    };

    dotenvy::dotenv().ok();
    quizmark::init_tracing();

    match quizmark::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
