//! Typed value comparison.
//!
//! A pair of values is compared as dates when both parse as dates, as
//! numbers when both are numeric, and as case-insensitive collated text
//! otherwise. Classification happens per pair, so a column holding mixed
//! kinds can compare different pairs under different rules.

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use icu_collator::Collator;
use icu_collator::CollatorOptions;

use super::Direction;
use crate::error::TableError;
use crate::model::Value;

/// Date-only layouts, tried after hyphens are replaced by slashes.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y/%m/%d"];

/// Date-time layouts, tried after hyphens are replaced by slashes.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

thread_local! {
    /// Root-locale collator for text comparison. `None` falls back to code
    /// point order.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Orders two lowercased strings with the root-locale collation, so
/// accented letters sort next to their base letter.
fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// How a pair of values is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Date,
    Number,
    String,
}

/// Parses a value as a date.
///
/// `DateTime` values pass through. Strings are tried as RFC 3339 first, then
/// with hyphens replaced by slashes against month-first and year-first
/// layouts, so `12-10-1990` and `12/10/1990` parse to the same instant.
/// Anything else is not a date.
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        Value::String(s) => parse_date_str(s),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let normalized = s.replace('-', "/");
    DATETIME_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(&normalized, layout).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(&normalized, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Returns `true` if the value parses as a date.
pub fn is_date(value: &Value) -> bool {
    parse_date(value).is_some()
}

/// Returns the numeric reading of a value.
///
/// Integers and finite floats are numeric, and so are strings that parse to
/// a finite number.
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(n) if n.is_finite() => Some(*n),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Returns the exact integer reading of a value, if it has one.
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Lowercased text used for string comparison.
///
/// Fails for values with no scalar text form (arrays, objects).
pub fn normalize_sort_text(value: &Value) -> Result<String, TableError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.to_lowercase()),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::DateTime(_) => {
            Ok(value.to_string().to_lowercase())
        }
        Value::Json(_) => Err(TableError::invalid_column(
            None,
            format!(
                "{} value cannot be coerced to a sortable string",
                value.type_name()
            ),
        )),
    }
}

/// Pre-computed comparison data for one value.
///
/// Building a key does all the fallible work, so sorting a slice of keys
/// cannot fail halfway.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    falsy: bool,
    date: Option<i64>,
    integer: Option<i64>,
    number: Option<f64>,
    text: String,
}

impl SortKey {
    /// Builds the key for a value.
    pub fn new(value: &Value) -> Result<Self, TableError> {
        Ok(Self {
            falsy: value.is_falsy(),
            date: parse_date(value).map(|dt| dt.timestamp_millis()),
            integer: parse_integer(value),
            number: parse_number(value),
            text: normalize_sort_text(value)?,
        })
    }

    /// Returns how this key compares against `other`.
    pub fn kind(&self, other: &SortKey) -> SortKind {
        if self.date.is_some() && other.date.is_some() {
            SortKind::Date
        } else if self.number.is_some() && other.number.is_some() {
            SortKind::Number
        } else {
            SortKind::String
        }
    }
}

/// Orders two keys.
///
/// Falsy values (see [`Value::is_falsy`]) come after the others in both
/// directions; two falsy values are equal. The rest compare by [`SortKind`]
/// and the result is reversed for [`Direction::Desc`]. Two integers compare
/// exactly rather than through `f64`.
pub fn compare_keys(a: &SortKey, b: &SortKey, direction: Direction) -> Ordering {
    match (a.falsy, b.falsy) {
        (true, true) => return Ordering::Equal,
        (false, true) => return Ordering::Less,
        (true, false) => return Ordering::Greater,
        (false, false) => {}
    }

    let ordering = match a.kind(b) {
        SortKind::Date => a.date.cmp(&b.date),
        SortKind::Number => match (a.integer, b.integer) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => a
                .number
                .partial_cmp(&b.number)
                .unwrap_or(Ordering::Equal),
        },
        SortKind::String => collate(&a.text, &b.text),
    };

    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

/// Orders two values, see [`compare_keys`].
pub fn compare_values(a: &Value, b: &Value, direction: Direction) -> Result<Ordering, TableError> {
    Ok(compare_keys(&SortKey::new(a)?, &SortKey::new(b)?, direction))
}
