//! Whole-string shape predicates: what the input consists of and how it is cased.

use serde::Serialize;

use crate::classify::{is_digit, is_general_whitespace, is_letter, is_titlecase};

/// Every flag is `false` for the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShapeFlags {
    pub only_whitespace: bool,
    /// Digits only (decimal digits plus digit symbols like `²`); no sign or decimal point.
    pub only_digits: bool,
    pub only_letters: bool,
    pub alphanumeric: bool,
    pub all_upper: bool,
    pub all_lower: bool,
    /// First codepoint is a letter already in titlecase form, the rest are
    /// unchanged by lowercasing.
    pub capitalized: bool,
    pub title_case: bool,
}

impl ShapeFlags {
    #[must_use]
    pub fn inspect(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }

        Self {
            only_whitespace: input.chars().all(is_general_whitespace),
            only_digits: input.chars().all(is_digit),
            only_letters: input.chars().all(is_letter),
            alphanumeric: input.chars().all(|c| is_letter(c) || c.is_numeric()),
            all_upper: is_all_upper(input),
            all_lower: is_all_lower(input),
            capitalized: is_capitalized(input),
            title_case: is_title_case(input),
        }
    }
}

fn is_upper_like(c: char) -> bool {
    c.is_uppercase() || is_titlecase(c)
}

/// At least one uppercase codepoint and no lowercase or titlecase ones.
fn is_all_upper(input: &str) -> bool {
    let mut seen_upper = false;
    for c in input.chars() {
        if c.is_lowercase() || is_titlecase(c) {
            return false;
        }
        seen_upper |= c.is_uppercase();
    }
    seen_upper
}

/// At least one lowercase codepoint and no uppercase or titlecase ones.
fn is_all_lower(input: &str) -> bool {
    let mut seen_lower = false;
    for c in input.chars() {
        if is_upper_like(c) {
            return false;
        }
        seen_lower |= c.is_lowercase();
    }
    seen_lower
}

/// `true` when titlecasing `c` leaves it unchanged.
///
/// The Latin digraphs titlecase to a separate form (`Ǆ` → `ǅ`), so the
/// uppercase mapping alone cannot decide them.
fn is_own_titlecase(c: char) -> bool {
    if is_titlecase(c) {
        return true;
    }
    if matches!(
        c,
        '\u{1C4}'
            | '\u{1C6}'
            | '\u{1C7}'
            | '\u{1C9}'
            | '\u{1CA}'
            | '\u{1CC}'
            | '\u{1F1}'
            | '\u{1F3}'
    ) {
        return false;
    }
    c.to_uppercase().eq(std::iter::once(c))
}

fn is_own_lowercase(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}

fn is_capitalized(input: &str) -> bool {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_letter(first) && is_own_titlecase(first) && chars.all(is_own_lowercase)
}

/// Cased runs start with an uppercase or titlecase codepoint and continue in
/// lowercase; uncased codepoints end a run.
fn is_title_case(input: &str) -> bool {
    let mut seen_cased = false;
    let mut in_cased_run = false;

    for c in input.chars() {
        if is_upper_like(c) {
            if in_cased_run {
                return false;
            }
            in_cased_run = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !in_cased_run {
                return false;
            }
            seen_cased = true;
        } else {
            in_cased_run = false;
        }
    }

    seen_cased
}
