//! Human-readable reports for a [`Profile`].

use textprof_core::{AppConfig, FrequencyEntry, NumericInterpretation, Profile};

/// Renders a character so that space and non-printables stay visible.
fn display_char(entry: &FrequencyEntry) -> String {
    if entry.printable && entry.ch != ' ' {
        entry.ch.to_string()
    } else {
        format!("{:?}", entry.ch)
    }
}

fn numeric_line(numeric: &NumericInterpretation) -> String {
    match numeric {
        NumericInterpretation::Integer(value) => format!("String is an integer: {value}"),
        NumericInterpretation::Float(value) => format!("String is a float: {value:?}"),
        NumericInterpretation::NotNumeric => "Not a pure number (int/float).".to_string(),
    }
}

pub(crate) fn inspect_report(profile: &Profile, config: &AppConfig) -> String {
    let size = &profile.size;
    let classes = &profile.classes;
    let mut lines = vec![
        "=== Input Inspector ===".to_string(),
        format!("Original (raw): {:?}", profile.original),
        format!("Characters: {}", size.char_count),
        format!("UTF-8 bytes: {}", size.byte_length),
        format!("ASCII only: {}", size.ascii_only),
        format!("Leading whitespace chars: {}", size.leading_whitespace),
        format!("Trailing whitespace chars: {}", size.trailing_whitespace),
        format!("Word count: {}", size.word_count),
    ];
    if size.word_count > 0 {
        lines.push(format!("Words: {:?}", size.words));
    }

    lines.push(String::new());
    lines.push("-- Character counts --".to_string());
    for (label, value) in [
        ("Letters", classes.letters),
        ("Upper", classes.upper),
        ("Lower", classes.lower),
        ("Caseless", classes.caseless_letters),
        ("Digits", classes.digits),
        ("Whitespace", classes.whitespace),
        ("Punctuation", classes.punctuation),
        ("Others", classes.others),
    ] {
        lines.push(format!("{label:12}: {value}"));
    }
    lines.push(format!("Unique characters: {}", profile.table.unique_chars()));

    lines.push(String::new());
    lines.push("-- Top character frequencies --".to_string());
    for entry in profile.table.top(config.top_n) {
        lines.push(format!("{:6} : {}", display_char(entry), entry.count));
    }

    lines.push(String::new());
    lines.push("-- Character details (top first) --".to_string());
    for entry in profile.table.top(config.detail_limit) {
        lines.push(format!(
            "{:6} count={:3} cp={:6} ({}) cat={} name={} printable={}",
            display_char(entry),
            entry.count,
            entry.codepoint,
            entry.codepoint_hex,
            entry.category,
            entry.display_name(),
            entry.printable,
        ));
    }

    lines.push(String::new());
    lines.push("-- Numeric detection --".to_string());
    lines.push(numeric_line(&profile.numeric));

    lines.push(String::new());
    lines.push("-- Palindrome checks --".to_string());
    lines.push(format!(
        "Palindrome (case-sensitive, ignore spaces): {}",
        profile.palindrome.case_sensitive
    ));
    lines.push(format!(
        "Palindrome (case-insensitive, ignore spaces): {}",
        profile.palindrome.case_insensitive
    ));

    lines.join("\n")
}

pub(crate) fn dissect_report(profile: &Profile) -> String {
    let shape = &profile.shape;
    [
        "Input dissector results:".to_string(),
        format!("Original: {:?}", profile.original),
        format!("Only whitespace: {}", shape.only_whitespace),
        format!("Only numbers (digits only): {}", shape.only_digits),
        format!("Alphabetical only: {}", shape.only_letters),
        format!("Alphanumeric: {}", shape.alphanumeric),
        format!("All upper case: {}", shape.all_upper),
        format!("All lower case: {}", shape.all_lower),
        format!("Capitalized (first upper, rest lower): {}", shape.capitalized),
        format!("Title case (each word capitalized): {}", shape.title_case),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use textprof_core::profile;

    use super::*;

    fn config_with(top_n: usize, detail_limit: usize) -> AppConfig {
        AppConfig {
            top_n,
            detail_limit,
            ..AppConfig::default()
        }
    }

    #[test]
    fn inspect_report_surfaces_every_section() {
        let report = inspect_report(&profile("121"), &AppConfig::default());
        assert!(report.contains("Original (raw): \"121\""));
        assert!(report.contains("Characters: 3"));
        assert!(report.contains("UTF-8 bytes: 3"));
        assert!(report.contains("Words: [\"121\"]"));
        assert!(report.contains("Digits      : 3"));
        assert!(report.contains("Unique characters: 2"));
        assert!(report.contains("1      : 2"));
        assert!(report.contains("cat=Nd name=DIGIT ONE printable=true"));
        assert!(report.contains("String is an integer: 121"));
        assert!(report.contains("Palindrome (case-sensitive, ignore spaces): true"));
        assert!(report.contains("Palindrome (case-insensitive, ignore spaces): true"));
    }

    #[test]
    fn inspect_report_escapes_space_and_controls() {
        let report = inspect_report(&profile("a b\t"), &AppConfig::default());
        assert!(report.contains("' '    : 1"));
        assert!(report.contains("'\\t'   : 1"));
        assert!(report.contains("name=<no name> printable=false"));
    }

    #[test]
    fn inspect_report_truncates_sections() {
        let report = inspect_report(&profile("abcdef"), &config_with(2, 1));
        let freq_rows = report.lines().filter(|l| l.contains("   : 1")).count();
        let detail_rows = report.lines().filter(|l| l.contains("count=")).count();
        assert_eq!(freq_rows, 2);
        assert_eq!(detail_rows, 1);
    }

    #[test]
    fn inspect_report_empty_input() {
        let report = inspect_report(&profile(""), &AppConfig::default());
        assert!(report.contains("Characters: 0"));
        assert!(!report.contains("Words:"));
        assert!(report.contains("Not a pure number (int/float)."));
    }

    #[test]
    fn numeric_line_float_keeps_fraction() {
        assert_eq!(
            numeric_line(&NumericInterpretation::Float(5.0)),
            "String is a float: 5.0"
        );
    }

    #[test]
    fn dissect_report_lists_predicates() {
        let report = dissect_report(&profile("Hello World"));
        assert!(report.contains("Alphabetical only: false"));
        assert!(report.contains("Capitalized (first upper, rest lower): false"));
        assert!(report.contains("Title case (each word capitalized): true"));
    }
}
