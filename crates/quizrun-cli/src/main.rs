//! quizrun CLI — a timed quiz in the terminal.

use std::path::PathBuf;
use std::process;

use clap::Parser;

mod run;

#[derive(Parser)]
#[command(
    name = "quizrun",
    version,
    about = "Timed terminal quiz over a CSV of questions and answers"
)]
struct Cli {
    /// CSV file with `question,answer` rows [default: problems.csv]
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Time limit for the whole quiz, in seconds [default: 10]
    #[arg(long)]
    time: Option<u64>,

    /// Shuffle the questions before starting
    #[arg(long)]
    shuffle: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizrun=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = run::execute(run::RunArgs {
        csv: cli.csv,
        time: cli.time,
        shuffle: cli.shuffle,
        config: cli.config,
    })
    .await;

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
