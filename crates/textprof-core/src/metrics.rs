use serde::Serialize;

use crate::classify::is_trim_whitespace;

/// Length and layout measurements of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SizeMetrics {
    /// Unicode scalar values, not bytes or grapheme clusters.
    pub char_count: usize,
    pub byte_length: usize,
    pub ascii_only: bool,
    pub leading_whitespace: usize,
    pub trailing_whitespace: usize,
    pub word_count: usize,
    pub words: Vec<String>,
}

impl SizeMetrics {
    /// Measures `input`.
    ///
    /// Leading/trailing runs only count tab, LF, CR and space, whereas words
    /// are split on the full Unicode whitespace set.
    #[must_use]
    pub fn measure(input: &str) -> Self {
        let words: Vec<String> = input.split_whitespace().map(str::to_owned).collect();

        Self {
            char_count: input.chars().count(),
            byte_length: input.len(),
            ascii_only: input.is_ascii(),
            leading_whitespace: input.chars().take_while(|&c| is_trim_whitespace(c)).count(),
            trailing_whitespace: input
                .chars()
                .rev()
                .take_while(|&c| is_trim_whitespace(c))
                .count(),
            word_count: words.len(),
            words,
        }
    }
}
