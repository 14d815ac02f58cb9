use serde::Serialize;

use crate::classify::is_general_whitespace;

/// Palindrome status of an input with every whitespace codepoint removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalindromeResult {
    pub case_sensitive: bool,
    pub case_insensitive: bool,
}

impl PalindromeResult {
    /// An input that reduces to nothing is a palindrome under both checks.
    #[must_use]
    pub fn check(input: &str) -> Self {
        let reduced = reduce(input);
        let lowered: Vec<char> = reduced.iter().map(|&c| simple_lowercase(c)).collect();

        Self {
            case_sensitive: is_mirrored(&reduced),
            case_insensitive: is_mirrored(&lowered),
        }
    }
}

/// Codepoints of `input` with general whitespace removed.
#[must_use]
pub fn reduce(input: &str) -> Vec<char> {
    input.chars().filter(|&c| !is_general_whitespace(c)).collect()
}

/// Single-codepoint lowercase mapping; multi-codepoint expansions keep only
/// the first codepoint.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn is_mirrored(chars: &[char]) -> bool {
    chars.iter().eq(chars.iter().rev())
}
