//! Date and datetime range resolution.
//!
//! Ranges come from the `range` property as ISO-formatted `start` / `end`
//! strings. Absent bounds fall back to the documented defaults; a present
//! bound that does not parse is an error, and out-of-order bounds are
//! never silently swapped.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::error::GeneratorError;
use crate::properties::{PropertyBag, RANGE_END_PROP, RANGE_PROP, RANGE_START_PROP};

/// Default inclusive lower bound when `range.start` is absent.
fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
}

/// Default exclusive upper bound when `range.end` is absent: December 31
/// of the current year. The only clock read outside the `duration` type,
/// and only at year granularity.
fn default_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(Utc::now().year(), 12, 31).unwrap()
}

fn bound<'a>(
    range: Option<&'a Map<String, Value>>,
    key: &'static str,
) -> Result<Option<&'a str>, GeneratorError> {
    match range.and_then(|map| map.get(key)) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(GeneratorError::MalformedProperty {
            key: format!("{RANGE_PROP}.{key}"),
            expected: "a string",
        }),
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, GeneratorError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| GeneratorError::InvalidRangeFormat {
        field,
        value: raw.to_string(),
    })
}

/// Parse a datetime bound: RFC 3339, with a date-only fallback read as
/// midnight UTC.
fn parse_datetime(field: &'static str, raw: &str) -> Result<DateTime<Utc>, GeneratorError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(midnight(date));
    }
    Err(GeneratorError::InvalidRangeFormat {
        field,
        value: raw.to_string(),
    })
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// A calendar date range, `start` inclusive, `end` exclusive.
///
/// Invariant: `start < end`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Resolve the `range` property into a date range, substituting the
    /// defaults for absent bounds.
    pub fn resolve(properties: &PropertyBag<'_>) -> Result<Self, GeneratorError> {
        let range = properties.get_map(RANGE_PROP)?;

        let start = match bound(range, RANGE_START_PROP)? {
            Some(raw) => parse_date(RANGE_START_PROP, raw)?,
            None => default_start(),
        };
        let end = match bound(range, RANGE_END_PROP)? {
            Some(raw) => parse_date(RANGE_END_PROP, raw)?,
            None => default_end(),
        };

        if start >= end {
            return Err(GeneratorError::InvalidRangeOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self { start, end })
    }

    /// Number of whole days covered by the range. At least 1.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// An instant range at millisecond resolution, `start` inclusive, `end`
/// exclusive.
///
/// Invariant: `start < end`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateTimeRange {
    /// Resolve the `range` property into a datetime range, substituting
    /// the defaults (at midnight UTC) for absent bounds.
    pub fn resolve(properties: &PropertyBag<'_>) -> Result<Self, GeneratorError> {
        let range = properties.get_map(RANGE_PROP)?;

        let start = match bound(range, RANGE_START_PROP)? {
            Some(raw) => parse_datetime(RANGE_START_PROP, raw)?,
            None => midnight(default_start()),
        };
        let end = match bound(range, RANGE_END_PROP)? {
            Some(raw) => parse_datetime(RANGE_END_PROP, raw)?,
            None => midnight(default_end()),
        };

        if start >= end {
            return Err(GeneratorError::InvalidRangeOrder {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        Ok(Self { start, end })
    }

    /// Milliseconds covered by the range. May be 0 for sub-millisecond
    /// spans, which callers must handle.
    pub fn num_milliseconds(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}
