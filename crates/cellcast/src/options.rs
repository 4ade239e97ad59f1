//! Per-call evaluation options: region and type hints, error suppression.

use serde::{Deserialize, Serialize};

/// Date-format convention tag determining field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRegion {
    /// Day-month-year.
    Euro,
    /// Month-day-year.
    Us,
    /// Year-month-day.
    Iso,
}

/// Caller-asserted target type, short-circuiting heuristic classification
/// in favor of the caller's declared schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeHint {
    Integer,
    Float,
    /// Either numeric type.
    Numeric,
    Date,
}

impl TypeHint {
    /// Returns true if this hint asserts a numeric family.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeHint::Integer | TypeHint::Float | TypeHint::Numeric)
    }

    /// Returns true if this hint asserts a date family.
    pub fn is_date(&self) -> bool {
        matches!(self, TypeHint::Date)
    }
}

/// Immutable per-call configuration. The default runs every heuristic with
/// autodetection and propagates failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Date-format region; `None` means autodetection.
    pub date: Option<DateRegion>,
    /// Caller-asserted target type.
    pub type_hint: Option<TypeHint>,
    /// Swallow pipeline failures and return null instead.
    pub ignore_error: bool,
}

impl Options {
    /// Options forcing a date region.
    pub fn with_date(region: DateRegion) -> Self {
        Self {
            date: Some(region),
            ..Self::default()
        }
    }

    /// Options asserting a target type.
    pub fn with_type(hint: TypeHint) -> Self {
        Self {
            type_hint: Some(hint),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_hint_families() {
        assert!(TypeHint::Integer.is_numeric());
        assert!(TypeHint::Float.is_numeric());
        assert!(TypeHint::Numeric.is_numeric());
        assert!(!TypeHint::Date.is_numeric());
        assert!(TypeHint::Date.is_date());
    }

    #[test]
    fn test_default_runs_autodetection() {
        let options = Options::default();
        assert!(options.date.is_none());
        assert!(options.type_hint.is_none());
        assert!(!options.ignore_error);
    }
}
