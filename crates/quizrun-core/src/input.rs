//! The input loop: ask each question in order and record the answers.

use crate::console::Console;
use crate::error::{QuizError, Result};
use crate::session::Session;

/// Feedback line for a correct answer.
pub const CORRECT: &str = "Correct!";
/// Feedback line for a wrong answer.
pub const INCORRECT: &str = "Incorrect!";

/// Present every round of `session` on `console`, blocking on each answer.
///
/// Returns once the last round has been answered. End of input while an
/// answer is pending is [`QuizError::InputClosed`].
pub async fn play_rounds<C>(session: &Session, console: &mut C) -> Result<()>
where
    C: Console + ?Sized,
{
    for (index, round) in session.rounds().iter().enumerate() {
        console.write_line(&format!("{}:", round.prompt())).await?;

        let Some(answer) = console.read_line().await? else {
            tracing::warn!(
                "input closed at question {} of {}",
                index + 1,
                session.len()
            );
            return Err(QuizError::InputClosed);
        };

        round.set_submitted(&answer);
        let correct = round.is_correct();
        tracing::debug!(round = index + 1, correct, "answer recorded");

        console
            .write_line(if correct { CORRECT } else { INCORRECT })
            .await?;
        console.write_line("").await?;
    }

    Ok(())
}
