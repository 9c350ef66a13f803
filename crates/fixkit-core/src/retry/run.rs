use super::policy::{RetryDecision, RetryPolicy};
use crate::fetch::FetchError;

/// Runs `f` (given the 1-based attempt number) until it succeeds or the
/// policy refuses another attempt. Sleeps on the current thread between tries.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Result<T, FetchError>,
{
    let mut attempt = 1u32;
    loop {
        let err = match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        let kind = err.retry_kind();
        match policy.decide(attempt, kind) {
            RetryDecision::NoRetry => {
                if attempt > 1 {
                    tracing::warn!(attempt, "giving up: {}", err);
                }
                return Err(err);
            }
            RetryDecision::RetryAfter(wait) => {
                tracing::warn!(
                    attempt,
                    ?kind,
                    wait_ms = wait.as_millis() as u64,
                    "fetch failed, retrying: {}",
                    err
                );
                std::thread::sleep(wait);
                attempt += 1;
            }
        }
    }
}
