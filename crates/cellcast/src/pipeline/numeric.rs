//! Numeric classification, decoration stripping, and post-load refinement.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::Options;
use crate::value::Value;

// =============================================================================
// CLASSIFIER DISQUALIFIERS
// =============================================================================
// Each one, on its own, marks a token as text that merely contains digits.

// A nonzero digit followed by a character that can never appear mid-number
// (letters, an embedded dash that is not a sign, ...).
static EMBEDDED_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[1-9][^0-9_,%.)eE]").unwrap());

// Commas grouping by one or two digits, like `10,20,30`: date-like or
// locale-inconsistent, not thousands separation.
static NON_THOUSANDS_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\d{1,2},").unwrap());

// A comma after a period contradicts thousands-then-decimal ordering.
static PERIOD_THEN_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\..*,").unwrap());

// =============================================================================
// NORMALIZER SHAPES
// =============================================================================

// Accounting negative: optional zeros/currency symbols around an opening
// parenthesis, like `($123.4)` or `0($123.4)`.
static ACCOUNTING_NEGATIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0$]*\([0$]*").unwrap());

// Zero-padded numeral: a generic loader would read the remainder as octal.
static OVERPADDED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?0+[+$-]?[1-9]").unwrap());
static ZERO_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"0+").unwrap());

static CURRENCY_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?0*\$").unwrap());

// =============================================================================
// REFINEMENT SHAPES
// =============================================================================
// Numeric forms the literal loader leaves as strings.

static SCIENTIFIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9_.]+[eE][+-]?[0-9_.]+$").unwrap());
static OCTAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?0o").unwrap());

/// Classification outcome gating the downstream stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumericClass {
    /// Disqualified by a shape heuristic.
    Not,
    /// Survived the heuristics; decorations may be stripped.
    Possible,
    /// Caller-asserted via type hint; heuristics bypassed.
    Certain,
}

impl NumericClass {
    pub(crate) fn is_possible(self) -> bool {
        !matches!(self, NumericClass::Not)
    }

    pub(crate) fn is_not(self) -> bool {
        matches!(self, NumericClass::Not)
    }
}

/// Deferred corrections, recorded during normalization and applied only at
/// the finisher, after the literal load.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Corrections {
    pub accounting_negative: bool,
    pub percentage: bool,
}

/// Decide whether the token is plausibly a number, without transforming it.
pub(crate) fn classify(token: &str, options: &Options) -> NumericClass {
    if options.type_hint.is_some_and(|hint| hint.is_numeric()) {
        return NumericClass::Certain;
    }

    let disqualified = EMBEDDED_SYMBOL.is_match(token)
        || NON_THOUSANDS_COMMA.is_match(token)
        || PERIOD_THEN_COMMA.is_match(token)
        || more_non_digits_than_digits(token)
        || !starts_numeric(token);

    if disqualified {
        NumericClass::Not
    } else {
        NumericClass::Possible
    }
}

fn more_non_digits_than_digits(token: &str) -> bool {
    let digits = token.chars().filter(char::is_ascii_digit).count();
    token.chars().count() - digits > digits
}

fn starts_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| matches!(c, '(' | '+' | '-' | '$' | '%' | '0'..='9'))
}

/// Strip decorations in place and record the deferred corrections.
///
/// Only called for possibly- or certainly-numeric tokens.
pub(crate) fn normalize(memo: &mut String, class: NumericClass) -> Corrections {
    let mut corrections = Corrections::default();

    if ACCOUNTING_NEGATIVE.is_match(memo) {
        corrections.accounting_negative = true;
        memo.retain(|c| c != '(' && c != ')');
    }
    // Checked after paren removal so `($1234%)` records both corrections.
    if memo.ends_with('%') {
        corrections.percentage = true;
        memo.truncate(memo.len() - 1);
    }

    if OVERPADDED.is_match(memo) {
        *memo = ZERO_RUN.replace(memo, "").into_owned();
    }
    if CURRENCY_PREFIX.is_match(memo) {
        memo.retain(|c| c != '$');
    }

    // Commas are thousands separators, but only within the integer part.
    if memo.contains(',') {
        *memo = match memo.split_once('.') {
            Some((integer, fraction)) => format!("{}.{}", integer.replace(',', ""), fraction),
            None => memo.replace(',', ""),
        };
    }

    // Unit suffixes like `2.4 SQFT` are only dropped on a caller assertion;
    // unguarded removal would mangle ordinary text.
    if class == NumericClass::Certain {
        memo.retain(|c| !c.is_ascii_alphabetic());
    }

    corrections
}

/// Convert numeric shapes the literal loader left as strings.
pub(crate) fn refine(value: Value) -> Value {
    let Value::Str(text) = value else {
        return value;
    };

    if SCIENTIFIC.is_match(&text) {
        let plain: String = text.chars().filter(|&c| c != '_').collect();
        if let Ok(parsed) = plain.parse::<f64>() {
            return Value::Float(parsed);
        }
    } else if OCTAL.is_match(&text) {
        if let Some(parsed) = parse_octal(&text) {
            return Value::Int(parsed);
        }
    }

    Value::Str(text)
}

fn parse_octal(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = unsigned.strip_prefix("0o")?;
    let magnitude = i64::from_str_radix(digits, 8).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
