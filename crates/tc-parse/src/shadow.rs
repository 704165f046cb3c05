//! Shadow export tokenizer

use crate::patterns::shadow_pair;
use tc_core::ParameterMap;
use tracing::{debug, trace};

/// Extracts `"name": number` pairs from a shadow export.
///
/// The text does not need to be valid JSON: the whole blob is scanned for
/// non-overlapping matches, so nested objects, trailing commas or truncated
/// documents all work. Values are kept as the literal text that matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadowParser;

impl ShadowParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a shadow export. A key seen twice keeps the last value.
    pub fn parse(&self, text: &str) -> ParameterMap {
        let mut map = ParameterMap::new();

        for caps in shadow_pair().captures_iter(text) {
            let key = caps[1].trim();
            let value = &caps[2];
            trace!("shadow pair {:?} = {}", key, value);

            if let Some(previous) = map.insert(key.to_string(), value.to_string()) {
                debug!(
                    "Shadow key {:?} repeated, replacing {} with {}",
                    key, previous, value
                );
            }
        }

        debug!("Parsed {} shadow parameters", map.len());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_object() {
        let map = ShadowParser::new().parse(r#"{"Env Tp C": 23.5, "Env Humi C%": 41}"#);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Env Tp C"], "23.5");
        assert_eq!(map["Env Humi C%"], "41");
    }

    #[test]
    fn test_last_write_wins() {
        let map = ShadowParser::new().parse("\"A\": 1\n\"A\": 2");
        assert_eq!(map.len(), 1);
        assert_eq!(map["A"], "2");
    }

    #[test]
    fn test_repeated_key_keeps_first_position() {
        let map = ShadowParser::new().parse(r#""A": 1, "B": 2, "A": 3"#);
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(map["A"], "3");
    }

    #[test]
    fn test_key_is_trimmed() {
        let map = ShadowParser::new().parse(r#"" DewPoint C ": 9.8"#);
        assert_eq!(map["DewPoint C"], "9.8");
    }

    #[test]
    fn test_value_text_is_preserved() {
        let map = ShadowParser::new().parse(r#""a": 1.50, "b": -0.0, "c": +7"#);
        assert_eq!(map["a"], "1.50");
        assert_eq!(map["b"], "-0.0");
        assert_eq!(map["c"], "+7");
    }

    #[test]
    fn test_no_space_after_colon() {
        let map = ShadowParser::new().parse(r#"{"a":5}"#);
        assert_eq!(map["a"], "5");
    }

    #[test]
    fn test_non_numeric_values_skipped() {
        let map = ShadowParser::new().parse(r#"{"mode": "auto", "on": true, "t": 20}"#);
        assert_eq!(map.len(), 1);
        assert_eq!(map["t"], "20");
    }

    #[test]
    fn test_nested_objects() {
        let text = r#"{
  "state": {
    "reported": {
      "1#Supply Air": 18.2,
      "2#Return Air": 24
    }
  },
  "version": 118
}"#;
        let map = ShadowParser::new().parse(text);
        assert_eq!(map.len(), 3);
        assert_eq!(map["1#Supply Air"], "18.2");
        assert_eq!(map["2#Return Air"], "24");
        assert_eq!(map["version"], "118");
    }

    #[test]
    fn test_key_cannot_span_lines() {
        let map = ShadowParser::new().parse("\"broken\nkey\": 5");
        assert!(map.is_empty());
    }

    #[test]
    fn test_malformed_input_yields_empty_map() {
        assert!(ShadowParser::new().parse("").is_empty());
        assert!(ShadowParser::new().parse("no pairs here").is_empty());
        assert!(ShadowParser::new().parse(r#"{"truncated": "#).is_empty());
    }
}
