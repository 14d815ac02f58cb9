//! Invariants that must hold for every input, checked with `proptest`, plus
//! a few fixed end-to-end profiles.

use proptest::prelude::*;

use textprof_core::{profile, NumericInterpretation};

proptest! {
    #[test]
    fn frequency_counts_sum_to_char_count(input in any::<String>()) {
        let p = profile(&input);
        prop_assert_eq!(p.table.total_count(), p.size.char_count);
    }

    #[test]
    fn letters_split_into_case_buckets(input in any::<String>()) {
        let c = profile(&input).classes;
        prop_assert_eq!(c.letters, c.upper + c.lower + c.caseless_letters);
    }

    #[test]
    fn class_buckets_cover_every_char(input in any::<String>()) {
        let p = profile(&input);
        prop_assert_eq!(p.classes.total(), p.size.char_count);
    }

    #[test]
    fn table_is_unique_and_sorted(input in any::<String>()) {
        let p = profile(&input);
        let entries = p.table.entries();
        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.count > b.count || (a.count == b.count && a.codepoint < b.codepoint),
                "out of order: {:?} before {:?}", a.ch, b.ch
            );
        }
    }

    #[test]
    fn profiling_is_idempotent(input in any::<String>()) {
        prop_assert_eq!(profile(&input), profile(&input));
    }

    #[test]
    fn ascii_integers_are_integers(value in any::<i64>()) {
        let p = profile(&value.to_string());
        prop_assert_eq!(p.numeric, NumericInterpretation::Integer(i128::from(value)));
    }

    #[test]
    fn padded_numbers_are_not_numeric(value in any::<u32>()) {
        let p = profile(&format!(" {value}"));
        prop_assert_eq!(p.numeric, NumericInterpretation::NotNumeric);
    }
}

#[test]
fn sentence_palindrome() {
    let p = profile("Was it a car or a cat I saw");
    assert!(p.palindrome.case_insensitive);
    assert!(!p.palindrome.case_sensitive);
    assert_eq!(p.size.word_count, 9);
    assert!(!p.shape.capitalized);
}

#[test]
fn mixed_script_profile() {
    let p = profile("Héllo, 世界 42");
    assert_eq!(p.size.char_count, 12);
    assert_eq!(p.size.byte_length, 17);
    assert!(!p.size.ascii_only);
    assert_eq!(p.classes.letters, 7);
    assert_eq!(p.classes.upper, 1);
    assert_eq!(p.classes.lower, 4);
    assert_eq!(p.classes.caseless_letters, 2);
    assert_eq!(p.classes.digits, 2);
    assert_eq!(p.classes.whitespace, 2);
    assert_eq!(p.classes.punctuation, 1);

    let top = p.table.top(2);
    assert_eq!(top[0].ch, ' ');
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].ch, 'l');
    assert_eq!(top[1].count, 2);
    assert_eq!(p.table.get('世').map(|e| e.category), Some("Lo"));
    assert_eq!(
        p.table.get('世').map(|e| e.display_name().to_string()),
        Some("CJK UNIFIED IDEOGRAPH-4E16".to_string())
    );
}

#[test]
fn profile_serializes_to_json() {
    let p = profile("12.5");
    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value["original"], "12.5");
    assert_eq!(value["numeric"]["kind"], "float");
    assert_eq!(value["numeric"]["value"], 12.5);
    assert_eq!(value["size"]["char_count"], 4);
    assert_eq!(value["table"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["table"][0]["name"], "FULL STOP");
    assert_eq!(value["table"][1]["codepoint_hex"], "0x31");

    let empty = serde_json::to_value(profile("")).unwrap();
    assert_eq!(empty["numeric"]["kind"], "not_numeric");
}

#[test]
fn digit_facets_agree_across_scripts() {
    let p = profile("٤٢");
    assert_eq!(p.classes.digits, 2);
    assert_eq!(p.numeric, NumericInterpretation::Integer(42));
    assert!(p.shape.only_digits);

    let p = profile("x²");
    assert_eq!(p.classes.digits, 1);
    assert_eq!(p.classes.others, 0);
    assert_eq!(p.numeric, NumericInterpretation::NotNumeric);
}

#[test]
fn infinite_float_survives_json() {
    let value = serde_json::to_value(profile("1e999")).unwrap();
    assert_eq!(value["numeric"]["kind"], "float");
    assert_eq!(value["numeric"]["value"], "inf");
}
