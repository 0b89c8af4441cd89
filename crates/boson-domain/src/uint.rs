use primitive_types::U256;
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::OnceLock;

use crate::validation::ValidationError;

/// Largest integer a native double holds exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Exponents beyond this are never expanded; the result could not fit a `uint256`.
const MAX_EXPANDED_DIGITS: usize = 80;

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("invalid regex"))
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(-?)([0-9]+)(?:\.([0-9]+))?(?:[eE]([+-]?[0-9]+))?$").expect("invalid regex")
    })
}

/// Parses a decimal string as an unsigned 256-bit integer.
///
/// Only ASCII digits are accepted: no sign, no `0x` prefix, no whitespace.
/// Leading zeros are tolerated (`"007"` parses as 7).
pub fn parse_uint(field: &'static str, value: &str) -> Result<U256, ValidationError> {
    if !decimal_pattern().is_match(value) {
        return Err(ValidationError::PatternMismatch {
            field,
            value: value.to_string(),
        });
    }
    U256::from_dec_str(value).map_err(|_| ValidationError::OutOfBounds {
        field,
        value: value.to_string(),
    })
}

/// Parses a JSON number as a native integer code.
///
/// The number must be integral and lie within `±MAX_SAFE_INTEGER`. Integral
/// floats such as `1.0` are accepted.
pub fn parse_code(field: &'static str, value: &Number) -> Result<i64, ValidationError> {
    if let Some(n) = value.as_i64() {
        if n.unsigned_abs() <= MAX_SAFE_INTEGER {
            return Ok(n);
        }
        return Err(ValidationError::OutOfBounds {
            field,
            value: value.to_string(),
        });
    }
    if value.is_u64() {
        return Err(ValidationError::OutOfBounds {
            field,
            value: value.to_string(),
        });
    }
    match value.as_f64() {
        Some(f) if !f.is_finite() => Err(ValidationError::OutOfBounds {
            field,
            value: value.to_string(),
        }),
        Some(f) if f.fract() != 0.0 => Err(ValidationError::PatternMismatch {
            field,
            value: value.to_string(),
        }),
        Some(f) if f.abs() <= MAX_SAFE_INTEGER as f64 => Ok(f as i64),
        _ => Err(ValidationError::OutOfBounds {
            field,
            value: value.to_string(),
        }),
    }
}

/// Renders an integer-valued wire element as its decimal string.
///
/// Numbers are read from their literal JSON text, never through `f64`, so a
/// `uint256`-sized literal keeps every digit. Integral literals in fraction
/// or exponent form (`86400.0`, `1e23`) are expanded exactly. A number with a
/// non-zero fractional part is left as a number. Strings and every other
/// value pass through untouched and are left for validation to reject.
pub fn to_decimal_string(value: Value) -> Value {
    match value {
        Value::Number(n) => match integer_text(&n.to_string()) {
            Some(text) => Value::String(text),
            None => Value::Number(n),
        },
        other => other,
    }
}

/// Exact integer text of a JSON number literal, if the literal is integral.
fn integer_text(literal: &str) -> Option<String> {
    let caps = number_pattern().captures(literal)?;
    let negative = !caps[1].is_empty();
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    let exponent: i64 = match caps.get(4) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let mut digits = format!("{}{}", &caps[2], fraction);
    let shift = exponent.checked_sub(fraction.len() as i64)?;
    if shift >= 0 {
        let zeros = usize::try_from(shift).ok()?;
        if digits.len().saturating_add(zeros) > MAX_EXPANDED_DIGITS {
            return None;
        }
        digits.push_str(&"0".repeat(zeros));
    } else {
        let dropped = usize::try_from(shift.unsigned_abs()).ok()?;
        let keep = digits.len().saturating_sub(dropped);
        if digits[keep..].bytes().any(|b| b != b'0') {
            return None;
        }
        digits.truncate(keep);
    }

    let trimmed = digits.trim_start_matches('0');
    let magnitude = if trimmed.is_empty() { "0" } else { trimmed };
    if negative && magnitude != "0" {
        Some(format!("-{}", magnitude))
    } else {
        Some(magnitude.to_string())
    }
}
