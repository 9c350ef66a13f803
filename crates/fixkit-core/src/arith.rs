//! Sums that refuse to silently overflow.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithError {
    /// The result does not fit the output type.
    #[error("sum overflows")]
    Overflow,
    /// An operand was NaN or infinite.
    #[error("operand is not finite: {0}")]
    NonFinite(f64),
}

/// Adds two integers, failing instead of wrapping on overflow.
pub fn checked_sum(a: i64, b: i64) -> Result<i64, ArithError> {
    a.checked_add(b).ok_or(ArithError::Overflow)
}

/// Adds two floats. Non-finite operands and a non-finite result are rejected.
pub fn finite_sum(a: f64, b: f64) -> Result<f64, ArithError> {
    for v in [a, b] {
        if !v.is_finite() {
            return Err(ArithError::NonFinite(v));
        }
    }
    let sum = a + b;
    if !sum.is_finite() {
        return Err(ArithError::Overflow);
    }
    Ok(sum)
}
