//! Timed quiz runner.
//!
//! Drives the whole program state machine: `Idle → Running → {Completed |
//! TimedOut}`. The input loop and the watchdog run as two branches of one
//! `select!`; the losing branch is dropped, which is the only cancellation
//! either side needs.

use std::time::Duration;

use crate::console::Console;
use crate::error::{QuizError, Result};
use crate::input::play_rounds;
use crate::session::{Session, Summary};
use crate::watchdog::Watchdog;

/// Line printed when the input loop finishes first.
pub const COMPLETED_NOTICE: &str = "Quiz Completed!";
/// Line printed when the watchdog fires first.
pub const TIMED_OUT_NOTICE: &str = "Times Up!";

/// How a quiz run ended, with the score at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Completed(Summary),
    TimedOut(Summary),
}

impl Outcome {
    pub fn summary(&self) -> &Summary {
        match self {
            Outcome::Completed(summary) | Outcome::TimedOut(summary) => summary,
        }
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Outcome::TimedOut(_))
    }

    /// Process exit status for this outcome: 0 on completion, 1 on timeout.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed(_) => 0,
            Outcome::TimedOut(_) => 1,
        }
    }
}

/// Runs a session against a console under a global time limit.
#[derive(Debug, Clone, Copy)]
pub struct QuizRunner {
    watchdog: Watchdog,
}

impl QuizRunner {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            watchdog: Watchdog::new(time_limit),
        }
    }

    pub fn time_limit(&self) -> Duration {
        self.watchdog.limit()
    }

    /// Print the instructions, wait for the start gate, then race the input
    /// loop against the watchdog and print the final summary.
    ///
    /// A timeout is returned as [`Outcome::TimedOut`], not as an error. The
    /// caller decides whether to exit the process.
    pub async fn run<C>(&self, session: &Session, console: &mut C) -> Result<Outcome>
    where
        C: Console + ?Sized,
    {
        console
            .write_line(&format!(
                "You have {} seconds to answer {} questions...",
                self.time_limit().as_secs(),
                session.len()
            ))
            .await?;
        console.write_line("Press Any Key to Begin...").await?;
        if console.read_line().await?.is_none() {
            return Err(QuizError::InputClosed);
        }

        tracing::info!(
            rounds = session.len(),
            limit_secs = self.time_limit().as_secs(),
            "quiz started"
        );

        // Biased so that a zero limit wins even against input that is
        // already available.
        let finished = tokio::select! {
            biased;
            () = self.watchdog.expired() => false,
            result = play_rounds(session, &mut *console) => {
                result?;
                true
            }
        };

        let summary = session.summary();
        let outcome = if finished {
            console.write_line(COMPLETED_NOTICE).await?;
            Outcome::Completed(summary)
        } else {
            console.write_line(TIMED_OUT_NOTICE).await?;
            Outcome::TimedOut(summary)
        };
        console.write_line(&summary.to_string()).await?;

        tracing::info!(
            timed_out = outcome.is_timed_out(),
            correct = summary.correct,
            incorrect = summary.incorrect,
            "quiz finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tokio::time::Instant;

    use crate::console::ScriptedConsole;

    fn session() -> Session {
        Session::build(vec![("2+2", "4"), ("Capital of France", "paris")], false)
    }

    #[tokio::test(start_paused = true)]
    async fn completes_before_timeout() {
        let session = session();
        let mut console = ScriptedConsole::new(["", "4", "Paris"]);

        let outcome = QuizRunner::new(Duration::from_secs(10))
            .run(&session, &mut console)
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Completed(_)));
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(outcome.summary().correct, 2);
        assert_eq!(outcome.summary().incorrect, 0);
        assert_eq!(
            console.output(),
            [
                "You have 10 seconds to answer 2 questions...",
                "Press Any Key to Begin...",
                "2+2:",
                "Correct!",
                "",
                "Capital of France:",
                "Correct!",
                "",
                "Quiz Completed!",
                "Score:\nCorrect: 2\nIncorrect: 0\nTotalScore: 100.0% ",
            ]
        );
    }

    #[tokio::test]
    async fn zero_limit_times_out_immediately() {
        let session = session();
        let mut console = ScriptedConsole::new(["", "4", "Paris"]);

        let outcome = QuizRunner::new(Duration::ZERO)
            .run(&session, &mut console)
            .await
            .unwrap();

        assert!(outcome.is_timed_out());
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(outcome.summary().correct, 0);
        assert_eq!(outcome.summary().incorrect, 2);
        assert!(!console.output().iter().any(|l| l == "2+2:"));
        assert!(console.output().iter().any(|l| l == "Times Up!"));
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_while_waiting_for_an_answer() {
        let session = session();
        let mut console = ScriptedConsole::new(["", "5"]).stalling();
        let start = Instant::now();

        let outcome = QuizRunner::new(Duration::from_secs(10))
            .run(&session, &mut console)
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_secs(10));
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.summary().correct, 0);
        assert_eq!(outcome.summary().incorrect, 2);

        let transcript = console.transcript();
        assert!(transcript.contains("2+2:\nIncorrect!"));
        assert!(transcript.contains("Capital of France:"));
        assert!(transcript.ends_with(
            "Times Up!\nScore:\nCorrect: 0\nIncorrect: 2\nTotalScore: 0.0% "
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn partial_score_survives_timeout() {
        let session = session();
        let mut console = ScriptedConsole::new(["", "4"]).stalling();

        let outcome = QuizRunner::new(Duration::from_secs(30))
            .run(&session, &mut console)
            .await
            .unwrap();

        assert!(outcome.is_timed_out());
        assert_eq!(outcome.summary().correct, 1);
        assert!((outcome.summary().score_percent - 50.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn closed_input_at_start_gate() {
        let session = session();
        let mut console = ScriptedConsole::new(Vec::<String>::new());

        let err = QuizRunner::new(Duration::from_secs(10))
            .run(&session, &mut console)
            .await
            .unwrap_err();
        assert!(matches!(err, QuizError::InputClosed));
    }

    #[tokio::test]
    async fn closed_input_mid_quiz() {
        let session = session();
        let mut console = ScriptedConsole::new(["", "4"]);

        let err = QuizRunner::new(Duration::from_secs(10))
            .run(&session, &mut console)
            .await
            .unwrap_err();
        assert!(matches!(err, QuizError::InputClosed));
    }

    #[tokio::test]
    async fn empty_session_completes_with_zero_score() {
        let session = Session::build(Vec::<(String, String)>::new(), false);
        let mut console = ScriptedConsole::new([""]);

        let outcome = QuizRunner::new(Duration::from_secs(10))
            .run(&session, &mut console)
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Completed(_)));
        assert_eq!(outcome.summary().score_percent, 0.0);
    }

    #[test]
    fn summary_readable_while_another_thread_answers() {
        let session = Arc::new(Session::build(
            (0..200).map(|i| (format!("q{i}"), i.to_string())),
            false,
        ));

        let writer = {
            let session = Arc::clone(&session);
            std::thread::spawn(move || {
                for i in 0..session.len() {
                    session.submit(i, &i.to_string());
                }
            })
        };

        let mut last = 0;
        for _ in 0..100 {
            let summary = session.summary();
            assert_eq!(summary.total(), 200);
            assert!(summary.correct >= last, "correct count went backwards");
            last = summary.correct;
        }

        writer.join().unwrap();
        assert_eq!(session.summary().correct, 200);
    }
}
