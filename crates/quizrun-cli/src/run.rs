//! Load a session and play it on stdin/stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizrun_core::config::{load_config_from, QuizConfig};
use quizrun_core::console::LineConsole;
use quizrun_core::loader::load_pairs;
use quizrun_core::{QuizRunner, Session};

/// Flags from the command line; anything unset falls back to the config.
pub struct RunArgs {
    pub csv: Option<PathBuf>,
    pub time: Option<u64>,
    pub shuffle: bool,
    pub config: Option<PathBuf>,
}

/// Apply command-line flags on top of the loaded config.
fn resolve(mut config: QuizConfig, args: RunArgs) -> QuizConfig {
    if let Some(csv) = args.csv {
        config.problems = csv;
    }
    if let Some(time) = args.time {
        config.time_limit_secs = time;
    }
    config.shuffle |= args.shuffle;
    config
}

/// Run the quiz and return the process exit code.
pub async fn execute(args: RunArgs) -> Result<i32> {
    let config = load_config_from(args.config.as_deref()).context("failed to load config")?;
    let config = resolve(config, args);

    let pairs = load_pairs(&config.problems)?;
    let session = Session::build(pairs, config.shuffle);
    tracing::info!(
        "loaded {} questions from {} (shuffle: {})",
        session.len(),
        config.problems.display(),
        config.shuffle
    );

    let mut console = LineConsole::stdio();
    let outcome = QuizRunner::new(config.time_limit())
        .run(&session, &mut console)
        .await
        .context("quiz aborted")?;

    Ok(outcome.exit_code())
}
