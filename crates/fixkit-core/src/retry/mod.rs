//! Backoff policy for fetches.
//!
//! The fetch layer says what kind of failure happened
//! (`FetchError::retry_kind`); this module decides whether and when to try
//! again.

mod policy;
mod run;

pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
