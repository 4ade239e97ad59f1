//! Sentinel resolution: null markers and special float values.
//!
//! Exact post-trim string matches only, never substring or pattern matches.

use crate::value::Value;

/// Null markers matched exactly. The list follows common spreadsheet and
/// statistics-tool conventions, including all-zero date placeholders.
const NULL_EXACT: &[&str] = &[
    "",
    "-",
    "?",
    "#REF!",
    "#NAME?",
    "#VALUE!",
    "#NULL!",
    "00/00/00",
    "0000-00-00",
];

/// Null markers matched case-insensitively.
const NULL_WORDS: &[&str] = &["n/a", "null", "nil", "na"];

const INFINITY: &[&str] = &["#DIV/0", "Infinity"];
const NEG_INFINITY: &[&str] = &["-Infinity"];
const NAN: &[&str] = &["NaN"];

/// Resolve a trimmed token against the sentinel sets, null first, then the
/// infinities, then NaN.
pub(crate) fn resolve(token: &str) -> Option<Value> {
    if is_null(token) {
        return Some(Value::Null);
    }
    if INFINITY.contains(&token) {
        return Some(Value::Float(f64::INFINITY));
    }
    if NEG_INFINITY.contains(&token) {
        return Some(Value::Float(f64::NEG_INFINITY));
    }
    if NAN.contains(&token) {
        return Some(Value::Float(f64::NAN));
    }
    None
}

fn is_null(token: &str) -> bool {
    NULL_EXACT.contains(&token)
        || NULL_WORDS.iter().any(|word| token.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_markers() {
        for token in ["", "-", "?", "N/A", "n/a", "NULL", "null", "Nil", "NA", "na"] {
            assert_eq!(resolve(token), Some(Value::Null), "{token:?}");
        }
    }

    #[test]
    fn test_spreadsheet_error_codes() {
        for token in ["#REF!", "#NAME?", "#VALUE!", "#NULL!"] {
            assert_eq!(resolve(token), Some(Value::Null), "{token:?}");
        }
    }

    #[test]
    fn test_zero_date_placeholders() {
        assert_eq!(resolve("00/00/00"), Some(Value::Null));
        assert_eq!(resolve("0000-00-00"), Some(Value::Null));
    }

    #[test]
    fn test_infinities() {
        assert_eq!(resolve("#DIV/0"), Some(Value::Float(f64::INFINITY)));
        assert_eq!(resolve("Infinity"), Some(Value::Float(f64::INFINITY)));
        assert_eq!(resolve("-Infinity"), Some(Value::Float(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_nan() {
        let Some(Value::Float(f)) = resolve("NaN") else {
            panic!("expected NaN");
        };
        assert!(f.is_nan());
    }

    #[test]
    fn test_exact_matches_only() {
        assert_eq!(resolve("Inf"), None);
        assert_eq!(resolve("nan"), None);
        assert_eq!(resolve("N/A "), None);
        assert_eq!(resolve("nah"), None);
    }
}
