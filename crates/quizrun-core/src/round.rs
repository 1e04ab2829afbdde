//! A single question/answer round.

use std::sync::{Mutex, MutexGuard};

/// Normalize answer text for comparison: trim surrounding whitespace and
/// lower-case.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// One question, its expected answer and the answer the player gave.
///
/// The submitted answer lives behind a mutex so the watchdog can score the
/// round while the input loop is still writing to it.
#[derive(Debug)]
pub struct Round {
    prompt: String,
    expected: String,
    submitted: Mutex<Option<String>>,
}

impl Round {
    /// Create an unanswered round. `expected` is normalized here.
    pub fn new(prompt: impl Into<String>, expected: &str) -> Self {
        Self {
            prompt: prompt.into(),
            expected: normalize(expected),
            submitted: Mutex::new(None),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The normalized answer, if one has been submitted.
    pub fn submitted(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Record the player's answer. A second call overwrites the first.
    pub fn set_submitted(&self, text: &str) {
        *self.lock() = Some(normalize(text));
    }

    /// `true` iff an answer was submitted and it matches the expected one.
    pub fn is_correct(&self) -> bool {
        self.lock().as_deref() == Some(self.expected.as_str())
    }

    // A poisoned lock still holds a whole `Option<String>`.
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.submitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clone for Round {
    fn clone(&self) -> Self {
        Self {
            prompt: self.prompt.clone(),
            expected: self.expected.clone(),
            submitted: Mutex::new(self.submitted()),
        }
    }
}

impl PartialEq for Round {
    fn eq(&self, other: &Self) -> bool {
        self.prompt == other.prompt
            && self.expected == other.expected
            && self.submitted() == other.submitted()
    }
}

impl Eq for Round {}
