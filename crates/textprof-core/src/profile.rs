use serde::Serialize;

use crate::chartable::CharacterTable;
use crate::classify::ClassCounts;
use crate::metrics::SizeMetrics;
use crate::numeric::NumericInterpretation;
use crate::palindrome::PalindromeResult;
use crate::shape::ShapeFlags;

/// Every facet of one input. Each facet is computed from the input alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub original: String,
    pub size: SizeMetrics,
    pub classes: ClassCounts,
    pub table: CharacterTable,
    pub numeric: NumericInterpretation,
    pub palindrome: PalindromeResult,
    pub shape: ShapeFlags,
}

/// Profiles `input`. Total and deterministic: the same input always yields
/// an equal `Profile`, and no input produces an error.
#[must_use]
pub fn profile(input: &str) -> Profile {
    let profile = Profile {
        original: input.to_owned(),
        size: SizeMetrics::measure(input),
        classes: ClassCounts::tally(input),
        table: CharacterTable::build(input),
        numeric: NumericInterpretation::interpret(input),
        palindrome: PalindromeResult::check(input),
        shape: ShapeFlags::inspect(input),
    };

    tracing::debug!(
        chars = profile.size.char_count,
        bytes = profile.size.byte_length,
        unique = profile.table.unique_chars(),
        numeric = profile.numeric.is_numeric(),
        "profiled input"
    );

    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_defaults() {
        let p = profile("");
        assert_eq!(p.size.char_count, 0);
        assert_eq!(p.size.byte_length, 0);
        assert!(p.table.is_empty());
        assert_eq!(p.numeric, NumericInterpretation::NotNumeric);
        assert!(p.palindrome.case_sensitive);
        assert!(p.palindrome.case_insensitive);
        assert_eq!(p.classes, ClassCounts::default());
    }

    #[test]
    fn single_uppercase_letter() {
        let p = profile("A");
        assert_eq!(p.numeric, NumericInterpretation::NotNumeric);
        assert_eq!(p.classes.letters, 1);
        assert_eq!(p.classes.upper, 1);
        assert!(p.shape.capitalized);
    }

    #[test]
    fn integer_palindrome() {
        let p = profile("121");
        assert_eq!(p.numeric, NumericInterpretation::Integer(121));
        assert!(p.palindrome.case_sensitive);
        assert!(p.palindrome.case_insensitive);
        assert!(p.shape.only_digits);
    }

    #[test]
    fn float_is_not_palindrome() {
        let p = profile("12.5");
        assert_eq!(p.numeric, NumericInterpretation::Float(12.5));
        assert!(!p.palindrome.case_sensitive);
        assert!(!p.palindrome.case_insensitive);
        assert_eq!(p.classes.punctuation, 1);
    }

    #[test]
    fn original_is_kept_verbatim() {
        let p = profile("  keep me \n");
        assert_eq!(p.original, "  keep me \n");
    }
}
