//! The token evaluation pipeline.
//!
//! A single linear pass over one token, organized as ordered stages that can
//! each short-circuit the rest: sentinel resolution, date inference, numeric
//! classification and normalization, a safety gate in front of the literal
//! loader, post-load refinement, and a finisher that applies deferred sign
//! and percent corrections. No state crosses invocations.

mod date;
mod numeric;
mod sentinel;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CellcastError, Result};
use crate::loader::LiteralLoader;
use crate::options::Options;
use crate::value::Value;

use numeric::{Corrections, NumericClass};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DIGITS_AND_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d,]+$").unwrap());

/// A single token evaluation: created per call, discarded after producing
/// one result.
pub struct Evaluation<'a> {
    raw: &'a str,
    options: &'a Options,
    loader: &'a dyn LiteralLoader,
}

impl<'a> Evaluation<'a> {
    pub fn new(raw: &'a str, options: &'a Options, loader: &'a dyn LiteralLoader) -> Self {
        Self {
            raw,
            options,
            loader,
        }
    }

    /// Run the pipeline inside its failure boundary: errors propagate by
    /// default, or collapse to null when `ignore_error` is set.
    pub fn run(&self) -> Result<Value> {
        match self.run_stages() {
            Err(_) if self.options.ignore_error => Ok(Value::Null),
            outcome => outcome,
        }
    }

    fn run_stages(&self) -> Result<Value> {
        let trimmed = self.raw.trim();

        if let Some(value) = sentinel::resolve(trimmed) {
            return Ok(value);
        }

        if let Some(region) = date::detect_region(trimmed, self.options) {
            return date::parse(trimmed, region);
        }

        let class = numeric::classify(trimmed, self.options);
        let mut memo = trimmed.to_string();
        let corrections = if class.is_possible() {
            numeric::normalize(&mut memo, class)
        } else {
            Corrections::default()
        };

        let mut value = if safe_for_load(&memo, class) {
            match self.loader.load(&memo) {
                Ok(loaded) => loaded,
                Err(err) => {
                    // Recoverable: keep the pre-load string.
                    tracing::debug!(token = %memo, error = %err, "literal loader rejected token");
                    Value::Str(memo)
                }
            }
        } else {
            Value::Str(memo)
        };

        if class.is_possible() {
            value = numeric::refine(value);
        }

        value = match value {
            Value::Str(text) => Value::Str(WHITESPACE_RUN.replace_all(&text, " ").into_owned()),
            other => other,
        };

        if corrections.percentage {
            value = self.percent_scaled(value)?;
        }
        if corrections.accounting_negative {
            value = self.negated(value)?;
        }

        Ok(value)
    }

    fn percent_scaled(&self, value: Value) -> Result<Value> {
        match value {
            Value::Int(n) => Ok(Value::Float(n as f64 / 100.0)),
            Value::Float(f) => Ok(Value::Float(f / 100.0)),
            _ => Err(self.correction_error("percent scaling")),
        }
    }

    fn negated(&self, value: Value) -> Result<Value> {
        match value {
            Value::Int(n) => Ok(n
                .checked_neg()
                .map(Value::Int)
                .unwrap_or(Value::Float(-(n as f64)))),
            Value::Float(f) => Ok(Value::Float(-f)),
            _ => Err(self.correction_error("sign negation")),
        }
    }

    fn correction_error(&self, correction: &'static str) -> CellcastError {
        CellcastError::Correction {
            token: self.raw.trim().to_string(),
            correction,
        }
    }
}

/// Decide whether the normalized token may be handed to the literal loader.
///
/// `#` reads as a comment marker, leading `@` and `,` are reserved in the
/// literal grammar, and a not-numeric token of digits and commas is most
/// likely comma-separated plain text, not a sequence.
fn safe_for_load(memo: &str, class: NumericClass) -> bool {
    if memo.contains('#') {
        return false;
    }
    if memo.starts_with('@') || memo.starts_with(',') {
        return false;
    }
    if class.is_not() && DIGITS_AND_COMMAS.is_match(memo) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadError;

    #[test]
    fn test_safe_for_load_rejects_comment_markers() {
        assert!(!safe_for_load("#hello", NumericClass::Not));
        assert!(!safe_for_load("1#2", NumericClass::Possible));
    }

    #[test]
    fn test_safe_for_load_rejects_reserved_leading_characters() {
        assert!(!safe_for_load("@ foo", NumericClass::Not));
        assert!(!safe_for_load(",1", NumericClass::Not));
    }

    #[test]
    fn test_safe_for_load_protects_comma_separated_text() {
        assert!(!safe_for_load("1,2,3", NumericClass::Not));
        // The same shape classified numeric is fine: commas were stripped.
        assert!(safe_for_load("123", NumericClass::Possible));
        // Non-digit content means it cannot be mistaken for a sequence.
        assert!(safe_for_load("a,b,c", NumericClass::Not));
    }

    /// Loader stub that rejects everything, for exercising the recoverable
    /// failure tier.
    struct RejectingLoader;

    impl LiteralLoader for RejectingLoader {
        fn load(&self, text: &str) -> std::result::Result<Value, LoadError> {
            Err(LoadError {
                text: text.to_string(),
                message: "stubbed".to_string(),
            })
        }
    }

    #[test]
    fn test_loader_failure_is_recoverable() {
        let options = Options::default();
        let value = Evaluation::new("hello world", &options, &RejectingLoader)
            .run()
            .unwrap();
        assert_eq!(value, Value::Str("hello world".to_string()));
    }

    /// Loader stub that echoes its input back as a string.
    struct EchoLoader;

    impl LiteralLoader for EchoLoader {
        fn load(&self, text: &str) -> std::result::Result<Value, LoadError> {
            Ok(Value::Str(text.to_string()))
        }
    }

    #[test]
    fn test_refinement_runs_on_loader_output() {
        let options = Options::default();
        let value = Evaluation::new("8e-05", &options, &EchoLoader).run().unwrap();
        assert_eq!(value, Value::Float(8e-5));
    }

    #[test]
    fn test_corrections_survive_a_rejecting_loader() {
        // The percent flag is applied even though the loader refused the
        // stripped token, because refinement still produced a number.
        let options = Options::default();
        let value = Evaluation::new("8e2%", &options, &RejectingLoader)
            .run()
            .unwrap();
        assert_eq!(value, Value::Float(8.0));
    }
}
