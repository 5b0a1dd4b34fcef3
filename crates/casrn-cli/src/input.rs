//! # Argument Interpretation
//!
//! Command-line arguments are untyped text. An optional `-` followed by ASCII
//! digits is an integer of any width, so `123456789012345678901` is out of
//! range rather than a float. Anything else is read as a JSON scalar:
//! `6417.5` is a float, `true` a boolean.
//! Anything that is not a JSON literal (such as `58-08-2`) is taken as the
//! hyphenated notation. The resulting value goes through
//! [`CasNumber::from_json()`], so floats and other non-integer kinds are
//! rejected with [`CasError::UnsupportedType`] instead of being coerced.

use casrn_core::{CasError, CasNumber};
use serde_json::Value;

/// Interpret one command-line argument as a CAS Registry Number.
pub fn parse_arg(arg: &str) -> Result<CasNumber, CasError> {
    if is_integer_literal(arg) {
        return parse_integer(arg);
    }
    match serde_json::from_str::<Value>(arg) {
        Ok(value) => CasNumber::from_json(&value),
        Err(_) => CasNumber::parse(arg),
    }
}

fn is_integer_literal(arg: &str) -> bool {
    let digits = arg.strip_prefix('-').unwrap_or(arg);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_integer(arg: &str) -> Result<CasNumber, CasError> {
    // Wider than i128 saturates; it is out of range either way.
    let wide = arg.parse::<i128>().unwrap_or(if arg.starts_with('-') {
        i128::MIN
    } else {
        i128::MAX
    });
    let value = u64::try_from(wide).map_err(|_| CasError::Range { value: wide })?;
    CasNumber::new(value)
}
