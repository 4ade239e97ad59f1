//! Date inference: region resolution and strict/lenient parsing.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CellcastError, Result};
use crate::options::{DateRegion, Options};
use crate::value::Value;

// ISO-shaped token: four-digit year (possibly over-padded with zeros),
// month 1-12, day 1-31, either optionally zero-padded, `-` or `/` separated.
static ISO_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0*[12]\d{3}[-/](?:0?[1-9]|1[0-2])[-/](?:0?[1-9]|[12]\d|3[01])$").unwrap()
});

static FOUR_DIGIT_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[1-9]\d{3}").unwrap());
static LEADING_ZEROS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0+").unwrap());

/// strptime formats per region: (four-digit-year, two-digit-year).
fn formats(region: DateRegion) -> (&'static str, &'static str) {
    match region {
        DateRegion::Euro => ("%d-%m-%Y", "%d-%m-%y"),
        DateRegion::Us => ("%m-%d-%Y", "%m-%d-%y"),
        DateRegion::Iso => ("%Y-%m-%d", "%y-%m-%d"),
    }
}

/// Decide whether a date interpretation applies, and under which region.
///
/// An explicit region option wins; otherwise ISO-shaped tokens autodetect;
/// otherwise a date type hint defaults the region to ISO. Anything else falls
/// through to numeric classification.
pub(crate) fn detect_region(token: &str, options: &Options) -> Option<DateRegion> {
    if let Some(region) = options.date {
        return Some(region);
    }
    if ISO_SHAPE.is_match(token) {
        return Some(DateRegion::Iso);
    }
    if options.type_hint.is_some_and(|hint| hint.is_date()) {
        return Some(DateRegion::Iso);
    }
    None
}

/// Parse a token under a resolved region. Failure here is pipeline-fatal.
pub(crate) fn parse(token: &str, region: DateRegion) -> Result<Value> {
    let four_digit_year = FOUR_DIGIT_YEAR.is_match(token);
    // Guard against over-padded tokens like `00020110628`.
    let normalized = LEADING_ZEROS.replace(token, "").replace('/', "-");
    let (with_century, without_century) = formats(region);

    let parsed = if four_digit_year {
        if region == DateRegion::Iso && normalized.len() < 10 {
            // Under-padded ISO (`2011-6-28`, `20110628`) misses the strict
            // format; fall back to free-form parsing.
            parse_lenient(&normalized)
        } else {
            parse_strict(&normalized, with_century)
        }
    } else {
        parse_strict(&normalized, without_century)
    };

    parsed
        .map(Value::Date)
        .map_err(|detail| CellcastError::DateParse {
            token: token.to_string(),
            detail,
        })
}

fn parse_strict(text: &str, format: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, format).map_err(|err| err.to_string())
}

/// Free-form year-month-day parsing: compact `YYYYMMDD` or `-` separated
/// fields without zero padding.
fn parse_lenient(text: &str) -> std::result::Result<NaiveDate, String> {
    let (year, month, day) = if text.len() == 8 && text.bytes().all(|b| b.is_ascii_digit()) {
        (field(&text[..4])?, field(&text[4..6])?, field(&text[6..8])?)
    } else {
        let parts: Vec<&str> = text.split('-').collect();
        if parts.len() != 3 {
            return Err(format!("'{text}' is not a year-month-day date"));
        }
        (field(parts[0])?, field(parts[1])?, field(parts[2])?)
    };

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| format!("{year:04}-{month:02}-{day:02} is out of range"))
}

fn field(text: &str) -> std::result::Result<u32, String> {
    text.parse::<u32>()
        .map_err(|_| format!("'{text}' is not a numeric date field"))
}
