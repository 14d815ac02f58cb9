//! Per-codepoint classification predicates and the class tally built from them.
//!
//! Two whitespace sets coexist here: [`is_trim_whitespace`] is the narrow
//! ASCII set used for leading/trailing run lengths, while
//! [`is_general_whitespace`] is the Unicode `White_Space` property used for
//! classification, word splitting and palindrome reduction.

use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

/// The disjoint bucket a single codepoint is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Whitespace,
    Punctuation,
    Other,
}

/// Returns `true` for codepoints whose general category is a letter (`L*`).
#[must_use]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Codepoints with `Numeric_Type=Digit`: digits that are not decimal digits
/// but still carry a single digit value (superscripts, circled digits, ...).
const DIGIT_RANGES: &[(char, char)] = &[
    ('\u{00B2}', '\u{00B3}'),
    ('\u{00B9}', '\u{00B9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19DA}', '\u{19DA}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247C}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24EA}', '\u{24EA}'),
    ('\u{24F5}', '\u{24FD}'),
    ('\u{24FF}', '\u{24FF}'),
    ('\u{2776}', '\u{277E}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278A}', '\u{2792}'),
    ('\u{10A40}', '\u{10A43}'),
    ('\u{10E60}', '\u{10E68}'),
    ('\u{11052}', '\u{1105A}'),
    ('\u{1E8C7}', '\u{1E8CF}'),
    ('\u{1F100}', '\u{1F10A}'),
];

/// Returns `true` for decimal digits (`Nd`) in any script.
#[must_use]
pub fn is_decimal(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Returns `true` for decimal digits and for the other codepoints with a
/// digit value, such as `²` or `①`.
#[must_use]
pub fn is_digit(c: char) -> bool {
    is_decimal(c) || DIGIT_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Value of a decimal digit (`Nd`) in any script, e.g. `'٤'` → 4.
///
/// Decimal digits are encoded in contiguous runs of ten, zero first, so the
/// value is the offset from the start of the run modulo ten.
#[must_use]
pub fn decimal_value(c: char) -> Option<u32> {
    if !is_decimal(c) {
        return None;
    }
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }

    let codepoint = u32::from(c);
    let mut start = codepoint;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        start -= 1;
    }
    Some((codepoint - start) % 10)
}

/// Returns `true` for titlecase letters (`Lt`), e.g. `ǅ`.
#[must_use]
pub fn is_titlecase(c: char) -> bool {
    get_general_category(c) == GeneralCategory::TitlecaseLetter
}

/// Unicode `White_Space` property.
#[must_use]
pub fn is_general_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// The narrow set stripped when measuring leading/trailing runs.
#[must_use]
pub fn is_trim_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | ' ')
}

/// The 32 ASCII punctuation characters; non-ASCII punctuation is not included.
#[must_use]
pub fn is_ascii_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Assigns `c` to exactly one bucket, testing letter, digit, whitespace and
/// punctuation in that order.
#[must_use]
pub fn classify(c: char) -> CharClass {
    if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_general_whitespace(c) {
        CharClass::Whitespace
    } else if is_ascii_punctuation(c) {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

/// Per-class tally over one input.
///
/// `letters == upper + lower + caseless_letters` always holds, and the five
/// top-level buckets sum to the input's codepoint count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    pub letters: usize,
    pub upper: usize,
    pub lower: usize,
    pub caseless_letters: usize,
    pub digits: usize,
    pub whitespace: usize,
    pub punctuation: usize,
    pub others: usize,
}

impl ClassCounts {
    /// Counts every codepoint of `input` in a single pass.
    #[must_use]
    pub fn tally(input: &str) -> Self {
        let mut counts = Self::default();
        for c in input.chars() {
            counts.record(c);
        }
        counts
    }

    fn record(&mut self, c: char) {
        match classify(c) {
            CharClass::Letter => {
                self.letters += 1;
                if c.is_uppercase() {
                    self.upper += 1;
                } else if c.is_lowercase() {
                    self.lower += 1;
                } else {
                    self.caseless_letters += 1;
                }
            }
            CharClass::Digit => self.digits += 1,
            CharClass::Whitespace => self.whitespace += 1,
            CharClass::Punctuation => self.punctuation += 1,
            CharClass::Other => self.others += 1,
        }
    }

    /// Sum of the five disjoint buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.letters + self.digits + self.whitespace + self.punctuation + self.others
    }
}

/// Two-letter general category code, e.g. `"Lu"`, `"Nd"`, `"Zs"`.
#[must_use]
#[allow(unreachable_patterns)]
pub fn general_category_code(c: char) -> &'static str {
    match get_general_category(c) {
        GeneralCategory::UppercaseLetter => "Lu",
        GeneralCategory::LowercaseLetter => "Ll",
        GeneralCategory::TitlecaseLetter => "Lt",
        GeneralCategory::ModifierLetter => "Lm",
        GeneralCategory::OtherLetter => "Lo",
        GeneralCategory::NonspacingMark => "Mn",
        GeneralCategory::SpacingMark => "Mc",
        GeneralCategory::EnclosingMark => "Me",
        GeneralCategory::DecimalNumber => "Nd",
        GeneralCategory::LetterNumber => "Nl",
        GeneralCategory::OtherNumber => "No",
        GeneralCategory::ConnectorPunctuation => "Pc",
        GeneralCategory::DashPunctuation => "Pd",
        GeneralCategory::OpenPunctuation => "Ps",
        GeneralCategory::ClosePunctuation => "Pe",
        GeneralCategory::InitialPunctuation => "Pi",
        GeneralCategory::FinalPunctuation => "Pf",
        GeneralCategory::OtherPunctuation => "Po",
        GeneralCategory::MathSymbol => "Sm",
        GeneralCategory::CurrencySymbol => "Sc",
        GeneralCategory::ModifierSymbol => "Sk",
        GeneralCategory::OtherSymbol => "So",
        GeneralCategory::SpaceSeparator => "Zs",
        GeneralCategory::LineSeparator => "Zl",
        GeneralCategory::ParagraphSeparator => "Zp",
        GeneralCategory::Control => "Cc",
        GeneralCategory::Format => "Cf",
        GeneralCategory::Surrogate => "Cs",
        GeneralCategory::PrivateUse => "Co",
        GeneralCategory::Unassigned => "Cn",
        _ => "Cn",
    }
}
