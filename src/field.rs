//! Lenient field coercion.
//!
//! CSV values are converted without ever failing: a number that does not
//! parse becomes `f64::NAN` and a date that does not parse becomes `None`.
//! Both sentinels flow silently into the aggregation queries, where NaN
//! poisons a sum and an invalid date fails every comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;

/// Calendar-date layouts accepted besides date-times.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time layouts without an offset; a trailing `Z` is stripped first.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts carrying a `+HH:MM` offset, beyond what RFC 3339 covers.
const ZONED_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Leading decimal number, or the literal `Infinity`.
fn number_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("number pattern is valid")
    })
}

/// `YYYY` or `YYYY-MM`.
fn partial_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{4})(?:-([0-9]{2}))?$").expect("date pattern is valid"))
}

/// Parses a numeric field, yielding NaN when absent or malformed.
///
/// Only the leading number is read, so `"12.5 EUR"` is 12.5, `"12abc"` is 12
/// and `"0x10"` is 0. `Infinity` is the only spelling of infinity accepted.
pub fn parse_number(value: Option<&str>) -> f64 {
    value
        .and_then(|v| number_prefix().find(v.trim_start()))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parses a calendar date, yielding `None` (the invalid-date sentinel) on failure.
///
/// Date-times with an offset are reduced to their UTC calendar date; those
/// without one keep their own calendar date. `YYYY` and `YYYY-MM` mean the
/// first day of the year or month.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    if let Some(caps) = partial_date().captures(trimmed) {
        let year = caps[1].parse().ok()?;
        let month = caps.get(2).map_or(Some(1), |m| m.as_str().parse().ok())?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    for format in ZONED_DATE_TIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Some(dt.naive_utc().date());
        }
    }

    let naive = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|dt| dt.date())
}

/// Reads a JSON number back, mapping `null` (how NaN is written) to NaN.
pub(crate) fn nan_from_null<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
