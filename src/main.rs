use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quiz_validator::{Verdict, DEFAULT_QUIZ_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file containing the quiz questions
    #[arg(default_value = DEFAULT_QUIZ_PATH)]
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let verdict = quiz_validator::validate(&args.file);

    ExitCode::from(exit_status(&verdict))
}

/// Process exit status for a verdict: 0 when the file is valid, 1 otherwise.
fn exit_status(verdict: &Verdict) -> u8 {
    if verdict.success { 0 } else { 1 }
}
