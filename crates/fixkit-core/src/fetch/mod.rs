//! JSON fetch over HTTP.
//!
//! Uses the curl crate (libcurl) for a GET, checks the status, and decodes the
//! body as JSON. Transient failures go through the retry policy.

mod error;
mod parse;

pub use error::FetchError;

use std::fmt;
use std::time::Duration;

use crate::retry::{run_with_retry, RetryPolicy};

/// Per-call fetch settings. Usually built from `FixkitConfig::fetch_options`.
#[derive(Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Total time allowed for one attempt.
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub user_agent: Option<String>,
    /// Sent as `Authorization: Bearer <token>`.
    pub bearer_token: Option<String>,
    /// Extra request headers as (name, value).
    pub headers: Vec<(String, String)>,
    pub retry: RetryPolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            follow_redirects: true,
            user_agent: None,
            bearer_token: None,
            headers: Vec::new(),
            retry: RetryPolicy::default(),
        }
    }
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("follow_redirects", &self.follow_redirects)
            .field("user_agent", &self.user_agent)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.headers)
            .field("retry", &self.retry)
            .finish()
    }
}

impl FetchOptions {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Header lines in curl's "Name: value" form, Accept and auth first.
    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec!["Accept: application/json".to_string()];
        if let Some(token) = &self.bearer_token {
            lines.push(format!("Authorization: Bearer {}", token));
        }
        for (k, v) in &self.headers {
            lines.push(format!("{}: {}", k.trim(), v.trim()));
        }
        lines
    }
}

/// GETs `url` and returns the body parsed as JSON.
///
/// Blocks the current thread; use [`fetch_json_async`] from async code.
pub fn fetch_json(url: &str, opts: &FetchOptions) -> Result<serde_json::Value, FetchError> {
    let url = validate_url(url)?;
    run_with_retry(&opts.retry, |attempt| {
        tracing::debug!(url, attempt, "fetch attempt");
        fetch_once(url, opts)
    })
}

/// Async form of [`fetch_json`]: runs the blocking transfer on tokio's blocking pool.
pub async fn fetch_json_async(
    url: &str,
    opts: &FetchOptions,
) -> anyhow::Result<serde_json::Value> {
    let url = url.to_string();
    let opts = opts.clone();
    let value = tokio::task::spawn_blocking(move || fetch_json(&url, &opts)).await??;
    Ok(value)
}

/// Returns the trimmed URL if it is http(s).
fn validate_url(url: &str) -> Result<&str, FetchError> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(trimmed)
    } else {
        Err(FetchError::InvalidUrl(url.to_string()))
    }
}

fn fetch_once(url: &str, opts: &FetchOptions) -> Result<serde_json::Value, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(opts.follow_redirects)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    let mut list = curl::easy::List::new();
    for line in opts.header_lines() {
        list.append(&line)?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(url, status = code, bytes = body.len(), "fetch response");
    if !parse::is_success(code) {
        return Err(FetchError::Http(code));
    }

    parse::decode_body(&body)
}
