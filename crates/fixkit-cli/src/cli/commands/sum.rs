//! Sum command: checked integer or finite float addition.

use anyhow::{Context, Result};
use fixkit_core::arith;

pub fn run_sum(a: &str, b: &str, float: bool) -> Result<()> {
    println!("{}", format_sum(a, b, float)?);
    Ok(())
}

pub(crate) fn format_sum(a: &str, b: &str, float: bool) -> Result<String> {
    if float {
        let x: f64 = a.trim().parse().with_context(|| format!("not a number: {}", a))?;
        let y: f64 = b.trim().parse().with_context(|| format!("not a number: {}", b))?;
        Ok(arith::finite_sum(x, y)?.to_string())
    } else {
        let x: i64 = a.trim().parse().with_context(|| format!("not an integer: {}", a))?;
        let y: i64 = b.trim().parse().with_context(|| format!("not an integer: {}", b))?;
        Ok(arith::checked_sum(x, y)?.to_string())
    }
}
