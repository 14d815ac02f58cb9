//! Whole-string numeric interpretation.
//!
//! The input is never trimmed: `" 42"` is not a number. Integer syntax is
//! tried first, then decimal syntax; the first grammar that accepts wins.
//! Decimal digits from any script count as digits, so `"٤٢"` is 42.

use std::borrow::Cow;

use serde::{Serialize, Serializer};

use crate::classify::decimal_value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NumericInterpretation {
    Integer(i128),
    /// Non-finite values serialize as the strings `"inf"` / `"-inf"`.
    Float(#[serde(serialize_with = "serialize_float")] f64),
    NotNumeric,
}

impl NumericInterpretation {
    #[must_use]
    pub fn interpret(input: &str) -> Self {
        let input = ascii_digits(input);
        if let Some(value) = parse_integer(&input) {
            Self::Integer(value)
        } else if let Some(value) = parse_decimal(&input) {
            Self::Float(value)
        } else {
            Self::NotNumeric
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::NotNumeric)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_sign_negative() {
        serializer.serialize_str("-inf")
    } else {
        serializer.serialize_str("inf")
    }
}

/// Rewrites non-ASCII decimal digits to their ASCII equivalents; every other
/// codepoint is kept as is.
fn ascii_digits(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| match decimal_value(c) {
                Some(value) if !c.is_ascii() => char::from_digit(value, 10).unwrap_or(c),
                _ => c,
            })
            .collect(),
    )
}

/// Optional sign followed by one or more ASCII digits.
///
/// Returns `None` on syntax errors and on values outside `i128`.
fn parse_integer(s: &str) -> Option<i128> {
    let digits = strip_sign(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i128>().ok()
}

/// `[sign] (digits [. digits*] | . digits) [(e|E) [sign] digits]`.
///
/// Words like `inf` and `nan`, hex floats and digit separators are rejected.
fn parse_decimal(s: &str) -> Option<f64> {
    if !is_decimal_literal(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn is_decimal_literal(s: &str) -> bool {
    let bytes = strip_sign(s).as_bytes();
    let mut pos = 0;

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
