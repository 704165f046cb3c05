//! Compiled patterns shared by the parsers and the sniffer
//!
//! Digit classes are spelled `[0-9]` because `\d` in the regex crate also
//! matches non-ASCII digits.

use regex::Regex;
use std::sync::OnceLock;

static SHADOW_PAIR: OnceLock<Regex> = OnceLock::new();
static NUMERIC_LABEL: OnceLock<Regex> = OnceLock::new();
static DECIMAL_VALUE: OnceLock<Regex> = OnceLock::new();

/// `"<key>": <number>`; group 1 is the key, group 2 the number literal
pub(crate) fn shadow_pair() -> &'static Regex {
    SHADOW_PAIR.get_or_init(|| {
        Regex::new(r#""([^"\n]+)":\s*([-+]?[0-9]+(?:\.[0-9]+)?)"#)
            .expect("shadow pair pattern is valid")
    })
}

/// Label lines such as `12#Supply Air`
pub(crate) fn numeric_label() -> &'static Regex {
    NUMERIC_LABEL.get_or_init(|| Regex::new(r"^[0-9]+#").expect("numeric label pattern is valid"))
}

/// Trim a readout line. A byte-order mark counts as whitespace, so a file
/// saved with one still matches on its first line.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// A whole line holding only an optionally signed decimal
pub(crate) fn decimal_value() -> &'static Regex {
    DECIMAL_VALUE.get_or_init(|| {
        Regex::new(r"^[-+]?[0-9]+(?:\.[0-9]+)?$").expect("decimal value pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_pair_captures() {
        let caps = shadow_pair().captures(r#""Fan Speed":  -12.50,"#).unwrap();
        assert_eq!(&caps[1], "Fan Speed");
        assert_eq!(&caps[2], "-12.50");
    }

    #[test]
    fn test_shadow_pair_rejects_string_values() {
        assert!(!shadow_pair().is_match(r#""mode": "auto""#));
    }

    #[test]
    fn test_numeric_label_is_anchored() {
        assert!(numeric_label().is_match("3#Return Air"));
        assert!(!numeric_label().is_match("Return 3#Air"));
        assert!(!numeric_label().is_match("#3"));
    }

    #[test]
    fn test_decimal_value_is_whole_line() {
        assert!(decimal_value().is_match("23.5"));
        assert!(decimal_value().is_match("-4"));
        assert!(decimal_value().is_match("+0.01"));
        assert!(!decimal_value().is_match("23.5 C"));
        assert!(!decimal_value().is_match("1."));
        assert!(!decimal_value().is_match(".5"));
    }

    #[test]
    fn test_trim_line_strips_bom() {
        assert_eq!(trim_line("\u{feff}Env Tp C "), "Env Tp C");
        assert_eq!(trim_line("\t12/34\r"), "12/34");
        assert_eq!(trim_line("\u{feff}"), "");
    }

    #[test]
    fn test_ascii_digits_only() {
        // Arabic-Indic digits
        assert!(!decimal_value().is_match("\u{0661}\u{0662}"));
        assert!(!numeric_label().is_match("\u{0661}#Fan"));
    }
}
