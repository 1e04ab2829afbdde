//! Error types for quiz loading and play.
//!
//! A timeout is not an error: it is reported through
//! [`Outcome::TimedOut`](crate::runner::Outcome::TimedOut).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The problem file could not be opened or read.
    #[error("failed to open problem file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The problem file is not valid CSV.
    #[error("failed to parse CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row did not carry both a question and an answer.
    #[error("{}: row {line} needs a question and an answer", .path.display())]
    MalformedRow { path: PathBuf, line: u64 },

    /// Input ended while an answer was still expected.
    #[error("input closed before the quiz was finished")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file or an override was invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = QuizError> = std::result::Result<T, E>;
