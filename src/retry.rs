//! Retry with exponential backoff for calls against unreliable collaborators.
//!
//! [`retry_with_backoff`] is parameterized by a [`RetryPolicy`] (attempt budget and
//! base delay) and an `is_retryable` predicate. Non-retryable errors are returned
//! immediately. When the budget is exhausted the error from the last attempt is
//! returned unchanged so callers can still branch on its kind.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Always at least 1.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Sleep inserted after failed attempt number `attempt` (1-based).
    ///
    /// | Failed attempt | Delay        |
    /// |----------------|--------------|
    /// | 1              | base × 2⁰    |
    /// | 2              | base × 2¹    |
    /// | 3              | base × 2²    |
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(1_000))
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or the
/// attempt budget runs out.
///
/// The operation receives the 1-based attempt number. `cancel` is checked before
/// every attempt and interrupts a pending backoff sleep.
pub async fn retry_with_backoff<T, F, Fut, P>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    is_retryable: P,
    mut operation: F,
) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
    P: Fn(&Error) -> bool,
{
    let mut attempt = 1u32;

    loop {
        if cancel.is_cancelled() {
            tracing::info!("Retry loop cancelled before attempt {}", attempt);
            return Err(Error::Cancelled);
        }

        let err = match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !is_retryable(&err) || attempt >= policy.max_attempts {
            if attempt > 1 {
                tracing::warn!("Giving up after {} attempt(s): {}", attempt, err);
            }
            return Err(err);
        }

        let delay = policy.delay_after(attempt);
        tracing::warn!(
            attempt,
            max_attempts = policy.max_attempts,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "transient failure, retrying after backoff"
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Retry backoff interrupted by cancellation");
                return Err(Error::Cancelled);
            }
            _ = tokio::time::sleep(delay) => {}
        }

        attempt += 1;
    }
}
