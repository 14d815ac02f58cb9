//! Frequency table of distinct characters with per-character Unicode metadata.

use std::collections::HashMap;

use serde::Serialize;

use crate::classify::general_category_code;

/// Rendered in place of a Unicode name for unnamed or unassigned codepoints.
pub const NO_NAME: &str = "<no name>";

/// One distinct character of the input and what Unicode knows about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub ch: char,
    pub count: usize,
    pub codepoint: u32,
    /// `0x`-prefixed lowercase hex, e.g. `"0x41"`.
    pub codepoint_hex: String,
    pub category: &'static str,
    /// `None` when the codepoint has no name (controls, unassigned).
    pub name: Option<String>,
    pub printable: bool,
}

impl FrequencyEntry {
    fn new(ch: char, count: usize) -> Self {
        let codepoint = u32::from(ch);
        Self {
            ch,
            count,
            codepoint,
            codepoint_hex: format!("{codepoint:#x}"),
            category: general_category_code(ch),
            name: unicode_name(ch),
            printable: is_printable(ch),
        }
    }

    /// The Unicode name, or [`NO_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NO_NAME)
    }
}

/// Canonical Unicode name of `c`, if it has one.
#[must_use]
pub fn unicode_name(c: char) -> Option<String> {
    unicode_names2::name(c).map(|name| name.to_string())
}

/// `false` for control, format, surrogate and unassigned codepoints.
#[must_use]
pub fn is_printable(c: char) -> bool {
    !matches!(general_category_code(c), "Cc" | "Cf" | "Cs" | "Cn")
}

/// Every distinct character of an input, sorted by count descending and then
/// by codepoint ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CharacterTable {
    entries: Vec<FrequencyEntry>,
}

impl CharacterTable {
    #[must_use]
    pub fn build(input: &str) -> Self {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in input.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }

        let mut entries: Vec<FrequencyEntry> = counts
            .into_iter()
            .map(|(ch, count)| FrequencyEntry::new(ch, count))
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.codepoint.cmp(&b.codepoint)));

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// The first `n` entries (fewer if the table is shorter).
    #[must_use]
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    #[must_use]
    pub fn unique_chars(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts; equals the input's codepoint count.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, ch: char) -> Option<&FrequencyEntry> {
        self.entries.iter().find(|e| e.ch == ch)
    }
}
