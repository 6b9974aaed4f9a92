//! Strict string-to-value conversion for long flags.

use crate::tokenize::RawValue;
use crate::value::{FlagType, Value};

/// Convert `raw` to a value of type `ty`, or `None` if it does not qualify.
///
/// A bare flag (`RawValue::Present`) is only meaningful for `bool`, where it
/// means `true`; every other type requires an explicit value.
pub fn coerce(ty: FlagType, raw: &RawValue) -> Option<Value> {
    let text = match raw {
        RawValue::Present => {
            return match ty {
                FlagType::Bool => Some(Value::Bool(true)),
                FlagType::Int | FlagType::UInt | FlagType::Float | FlagType::String => None,
            };
        }
        RawValue::Text(text) => text.as_str(),
    };

    match ty {
        FlagType::Bool => parse_bool(text).map(Value::Bool),
        FlagType::Int => parse_int(text).map(Value::Int),
        FlagType::UInt => parse_uint(text).map(Value::UInt),
        FlagType::Float => parse_number(text).map(Value::Float),
        FlagType::String => Some(Value::String(text.to_string())),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "0" | "f" | "false" => Some(false),
        "1" | "t" | "true" => Some(true),
        _ => None,
    }
}

fn parse_int(text: &str) -> Option<i64> {
    if let Ok(v) = text.trim_ascii().parse::<i64>() {
        return Some(v);
    }
    let n = parse_number(text)?;
    // i64::MAX is not representable as f64; the bound is exclusive.
    if n.fract() != 0.0 || n < i64::MIN as f64 || n >= i64::MAX as f64 {
        return None;
    }
    Some(n as i64)
}

fn parse_uint(text: &str) -> Option<u64> {
    if let Ok(v) = text.trim_ascii().parse::<u64>() {
        return Some(v);
    }
    let n = parse_number(text)?;
    if n.fract() != 0.0 || n < 0.0 || n >= u64::MAX as f64 {
        return None;
    }
    Some(n as u64)
}

/// Parse a decimal number: optional sign, digits with an optional fraction,
/// optional exponent, surrounded by optional ASCII whitespace.
///
/// Rejects the spellings `str::parse::<f64>` accepts beyond that (`inf`, `NaN`).
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_ascii();
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }

    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
