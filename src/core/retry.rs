//! Linear-backoff retry executor.
//!
//! Wraps any fallible asynchronous operation and re-invokes it up to a fixed
//! attempt budget. The executor knows nothing about speech synthesis; the
//! pipeline wraps provider calls with it, and tests drive it with plain
//! closures.

use std::future::Future;
use std::time::Duration;

/// Invoke `operation` up to `max_attempts` times (clamped to at least one)
/// and return the first success.
///
/// Before each re-attempt the `on_retry` observer receives the 1-based number
/// of the attempt that just failed together with its error, then the executor
/// sleeps `base_delay * attempt` — the wait grows linearly over the sequence.
/// When every attempt fails, the error from the final attempt is returned and
/// earlier errors are discarded. There is no jitter and no cancellation: a
/// started sequence runs to completion or exhaustion.
pub async fn retry_with_backoff<T, E, F, Fut>(
    mut operation: F,
    max_attempts: u32,
    base_delay: Duration,
    mut on_retry: impl FnMut(u32, &E),
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts {
                    return Err(err);
                }
                on_retry(attempt, &err);
                tokio::time::sleep(base_delay * attempt).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails until the call counter reaches `succeed_on`, then succeeds with
    /// the attempt number.
    async fn flaky(counter: &AtomicU32, succeed_on: u32) -> Result<u32, String> {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if n >= succeed_on {
            Ok(n)
        } else {
            Err(format!("attempt {n} failed"))
        }
    }

    #[tokio::test]
    async fn first_success_returns_without_observer_calls() {
        let counter = AtomicU32::new(0);
        let mut observed = 0;
        let result = retry_with_backoff(
            || flaky(&counter, 1),
            5,
            Duration::from_millis(1),
            |_, _: &String| observed += 1,
        )
        .await;

        assert_eq!(result, Ok(1));
        assert_eq!(observed, 0);
    }

    #[tokio::test]
    async fn retries_until_success_and_observes_each_failure() {
        let counter = AtomicU32::new(0);
        let mut observed = Vec::new();
        let result = retry_with_backoff(
            || flaky(&counter, 3),
            5,
            Duration::from_millis(1),
            |attempt, err: &String| observed.push((attempt, err.clone())),
        )
        .await;

        assert_eq!(result, Ok(3));
        // two failures before success, observed with increasing attempt numbers
        assert_eq!(observed.len(), 2);
        assert_eq!(observed[0], (1, "attempt 1 failed".to_string()));
        assert_eq!(observed[1], (2, "attempt 2 failed".to_string()));
    }

    #[tokio::test]
    async fn exhaustion_propagates_the_last_error() {
        let counter = AtomicU32::new(0);
        let result: Result<u32, String> = retry_with_backoff(
            || flaky(&counter, u32::MAX),
            3,
            Duration::from_millis(1),
            |_, _| {},
        )
        .await;

        assert_eq!(result, Err("attempt 3 failed".to_string()));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_attempt_budget_still_runs_once() {
        let counter = AtomicU32::new(0);
        let result: Result<u32, String> =
            retry_with_backoff(|| flaky(&counter, u32::MAX), 0, Duration::from_millis(1), |_, _| {})
                .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
