//! Validation utilities shared by the edukyber crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate that a value belongs to a fixed set of supported values
pub fn one_of<T>(value: T, allowed: &[T], context: &'static str) -> Result<()>
where
    T: PartialEq + core::fmt::Display,
{
    if allowed.contains(&value) {
        return Ok(());
    }
    let options: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();
    Err(Error::param(
        context,
        format!("{} is not one of {{{}}}", value, options.join(", ")),
    ))
}

/// Validate that a phase artifact is present
#[inline(always)]
pub fn present<T>(
    value: Option<T>,
    operation: &'static str,
    missing: &'static str,
) -> Result<T> {
    value.ok_or(Error::Precondition { operation, missing })
}
