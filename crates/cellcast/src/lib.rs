//! Cellcast: heuristic type inference for single tabular-export tokens.
//!
//! Tabular exports (spreadsheets, CSV dumps) encode numbers, dates, and
//! missing-value markers with inconsistent and lossy conventions: accounting
//! parentheses for negatives, thousands separators, currency prefixes,
//! leading zeros, region-ambiguous date orderings, spreadsheet error codes.
//! Cellcast takes one raw cell value at a time and returns the most plausible
//! strongly typed reading, falling back to the whitespace-normalized string
//! when no interpretation is safe.
//!
//! # Example
//!
//! ```
//! use cellcast::{evaluate, Options, Value};
//!
//! let value = evaluate("($1,234.50)", &Options::default()).unwrap();
//! assert_eq!(value, Value::Float(-1234.5));
//!
//! let value = evaluate("N/A", &Options::default()).unwrap();
//! assert_eq!(value, Value::Null);
//! ```
//!
//! Region-ambiguous dates are only parsed when the caller names a convention:
//!
//! ```
//! use cellcast::{evaluate, DateRegion, Options, Value};
//!
//! let us = Options::with_date(DateRegion::Us);
//! assert!(matches!(evaluate("12/25/82", &us).unwrap(), Value::Date(_)));
//! assert!(matches!(evaluate("12/25/82", &Options::default()).unwrap(), Value::Str(_)));
//! ```

pub mod error;
pub mod loader;
pub mod options;
pub mod pipeline;
pub mod value;

pub use error::{CellcastError, Result};
pub use loader::{LiteralLoader, LoadError, YamlLoader};
pub use options::{DateRegion, Options, TypeHint};
pub use pipeline::Evaluation;
pub use value::Value;

/// Evaluate a raw token with the default literal loader.
pub fn evaluate(raw: &str, options: &Options) -> Result<Value> {
    evaluate_with_loader(raw, options, &YamlLoader)
}

/// Evaluate a raw token against a caller-supplied literal loader.
pub fn evaluate_with_loader(
    raw: &str,
    options: &Options,
    loader: &dyn LiteralLoader,
) -> Result<Value> {
    Evaluation::new(raw, options, loader).run()
}

/// Evaluate an already-wrapped value. Anything that is not a string passes
/// through unchanged; strings go through the full pipeline.
pub fn evaluate_value(raw: Value, options: &Options) -> Result<Value> {
    match raw {
        Value::Str(text) => evaluate(&text, options),
        other => Ok(other),
    }
}
