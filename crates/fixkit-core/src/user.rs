//! User record normalization.
//!
//! Accepts loosely-typed user JSON, requires an email, and produces a record
//! with a trimmed, lower-cased email. `id` and `name` pass through as given.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// No `email` field, or it is empty after trimming.
    #[error("email required")]
    MissingEmail,
    /// Input is not a user object (wrong JSON shape or field types).
    #[error("malformed user record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// User identifier as it appears in source data: any JSON number or a string.
///
/// Variants are tried in order, so integers stay integers and only
/// non-integral or out-of-range numbers land in `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    Text(String),
}

/// Raw user record. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedUser {
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub email: String,
}

pub fn normalize_user(user: &UserRecord) -> Result<NormalizedUser, UserError> {
    let email = user
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(UserError::MissingEmail)?;

    Ok(NormalizedUser {
        id: user.id.clone(),
        name: user.name.clone(),
        email: email.to_lowercase(),
    })
}

/// Deserialize a JSON value into a [`UserRecord`] and normalize it.
pub fn normalize_value(value: &serde_json::Value) -> Result<NormalizedUser, UserError> {
    let record = UserRecord::deserialize(value)?;
    let normalized = normalize_user(&record)?;
    tracing::debug!(id = ?normalized.id, "normalized user record");
    Ok(normalized)
}
