use thiserror::Error;

use crate::retry::ErrorKind;

/// Failure of a single JSON fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL rejected before any request was made.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// 2xx response with no body to parse.
    #[error("empty response body")]
    EmptyBody,
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether (and why) another attempt could succeed.
    pub fn retry_kind(&self) -> ErrorKind {
        match self {
            FetchError::Http(code) => status_kind(*code),
            FetchError::Curl(e) => curl_kind(e),
            FetchError::InvalidUrl(_) | FetchError::EmptyBody | FetchError::Decode(_) => {
                ErrorKind::Other
            }
        }
    }
}

fn status_kind(code: u32) -> ErrorKind {
    match code {
        408 => ErrorKind::Timeout,
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

/// Only the failures a plain GET can hit; option-setting errors are `Other`.
fn curl_kind(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        ErrorKind::Timeout
    } else if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_got_nothing()
        || e.is_recv_error()
    {
        ErrorKind::Connection
    } else {
        ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_worth_retrying() {
        assert_eq!(FetchError::Http(408).retry_kind(), ErrorKind::Timeout);
        assert_eq!(FetchError::Http(429).retry_kind(), ErrorKind::Throttled);
        assert_eq!(FetchError::Http(503).retry_kind(), ErrorKind::Throttled);
        assert_eq!(FetchError::Http(504).retry_kind(), ErrorKind::Http5xx(504));
    }

    #[test]
    fn client_errors_are_final() {
        for code in [400, 401, 403, 404, 422] {
            assert_eq!(FetchError::Http(code).retry_kind(), ErrorKind::Other, "{}", code);
        }
    }

    #[test]
    fn curl_transport_failures() {
        // CURLE_COULDNT_RESOLVE_HOST = 6, CURLE_COULDNT_CONNECT = 7,
        // CURLE_OPERATION_TIMEDOUT = 28, CURLE_GOT_NOTHING = 52,
        // CURLE_URL_MALFORMAT = 3
        let kind = |code| FetchError::Curl(curl::Error::new(code)).retry_kind();
        assert_eq!(kind(6), ErrorKind::Connection);
        assert_eq!(kind(7), ErrorKind::Connection);
        assert_eq!(kind(28), ErrorKind::Timeout);
        assert_eq!(kind(52), ErrorKind::Connection);
        assert_eq!(kind(3), ErrorKind::Other);
    }

    #[test]
    fn local_failures_are_final() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(FetchError::Decode(bad_json).retry_kind(), ErrorKind::Other);
        assert_eq!(FetchError::EmptyBody.retry_kind(), ErrorKind::Other);
        assert_eq!(
            FetchError::InvalidUrl("ftp://x".into()).retry_kind(),
            ErrorKind::Other
        );
    }
}
