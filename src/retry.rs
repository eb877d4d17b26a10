use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::debug;

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Errors that may succeed when the same request is sent again.
pub trait Retriable {
    fn is_retriable(&self) -> bool;
}

/// Bounded retry with equal-jitter exponential backoff.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            initial_backoff_ms: INITIAL_BACKOFF_MS,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries.
    #[cfg(test)]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff_ms: 0,
        }
    }

    pub async fn run<T, E, F, Fut>(&self, provider: &'static str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retriable + Display,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retriable() && attempt + 1 < self.max_attempts.max(1) => {
                    let delay_ms = self.backoff_ms(attempt);
                    debug!(
                        provider,
                        attempt = attempt + 1,
                        delay_ms,
                        error = %e,
                        "retrying after transient error"
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Equal jitter backoff: base/2 + rand(0, base/2).
    fn backoff_ms(&self, attempt: u32) -> u64 {
        let base = self.initial_backoff_ms.saturating_mul(2u64.saturating_pow(attempt));
        let half = base / 2;
        half + fastrand::u64(..half.max(1))
    }
}
