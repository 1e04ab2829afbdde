//! Quiz session: the ordered rounds of one run and their derived score.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::round::Round;

/// The ordered rounds of a single quiz run.
///
/// The runner borrows one session in both the input loop and the watchdog
/// branch of its `select!`. Each answer write only touches its own round, so
/// `Session` is `Sync` and can also sit behind an `Arc` across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    rounds: Vec<Round>,
}

/// Score of a session at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub correct: usize,
    pub incorrect: usize,
    pub score_percent: f64,
}

impl Session {
    /// Build a session from `(prompt, expected)` pairs, optionally shuffled
    /// with a freshly seeded generator.
    pub fn build<I, P, A>(pairs: I, shuffle: bool) -> Self
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: AsRef<str>,
    {
        Self::build_with_rng(pairs, shuffle, &mut rand::rng())
    }

    /// Like [`Session::build`], drawing the permutation from `rng`.
    pub fn build_with_rng<I, P, A, R>(pairs: I, shuffle: bool, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut rounds: Vec<Round> = pairs
            .into_iter()
            .map(|(prompt, expected)| Round::new(prompt, expected.as_ref()))
            .collect();

        if shuffle {
            rounds.shuffle(rng);
            tracing::debug!(rounds = rounds.len(), "shuffled session");
        }

        Self { rounds }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Record an answer for the round at `index`. Returns whether it was
    /// correct, or `None` if there is no such round.
    pub fn submit(&self, index: usize, answer: &str) -> Option<bool> {
        let round = self.rounds.get(index)?;
        round.set_submitted(answer);
        Some(round.is_correct())
    }

    /// Score the session as it stands. Unanswered rounds count as incorrect.
    pub fn summary(&self) -> Summary {
        let total = self.rounds.len();
        let correct = self.rounds.iter().filter(|r| r.is_correct()).count();
        let score_percent = if total == 0 {
            0.0
        } else {
            100.0 * correct as f64 / total as f64
        };

        Summary {
            correct,
            incorrect: total - correct,
            score_percent,
        }
    }
}

impl Summary {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score:\nCorrect: {}\nIncorrect: {}\nTotalScore: {:.1}% ",
            self.correct, self.incorrect, self.score_percent
        )
    }
}
