//! Decode a response body into JSON.

use super::FetchError;

/// Parse `body` as JSON. Whitespace-only bodies are reported as empty.
pub(crate) fn decode_body(body: &[u8]) -> Result<serde_json::Value, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}

/// True for a 2xx status.
pub(crate) fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}
