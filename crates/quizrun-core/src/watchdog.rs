//! Countdown watchdog enforcing the overall time limit.

use std::time::Duration;

/// A one-shot countdown over the whole quiz.
///
/// The watchdog itself has no side effects: the runner races
/// [`Watchdog::expired`] against the input loop and acts on whichever
/// finishes first. Dropping the future cancels the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watchdog {
    limit: Duration,
}

impl Watchdog {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Resolves once the limit has elapsed. A zero limit is ready on the
    /// first poll.
    pub async fn expired(self) {
        if !self.limit.is_zero() {
            tokio::time::sleep(self.limit).await;
        }
        tracing::debug!("watchdog expired after {:?}", self.limit);
    }
}
