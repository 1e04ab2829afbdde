//! quizrun-core — Rounds, sessions, scoring and the timed quiz runner.
//!
//! This crate holds the quiz state model and the race between the input loop
//! and the countdown watchdog. The `quizrun-cli` crate wires it to a terminal.

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod loader;
pub mod round;
pub mod runner;
pub mod session;
pub mod watchdog;

pub use error::{QuizError, Result};
pub use round::Round;
pub use runner::{Outcome, QuizRunner};
pub use session::{Session, Summary};
