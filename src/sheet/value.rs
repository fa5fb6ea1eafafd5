//! Loosely typed cell values, as they come out of a sheet.
//!
//! A sheet cell can hold a boolean, a number, a piece of text or a date, and
//! the same logical field is not guaranteed to use the same representation on
//! every row. All coercions live here so that callers never look at raw cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use crate::utils::date::TimeZoneSetting;

/// Storage format for `Date` cells (and the canonical text form of a date-time).
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const TEXT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const TEXT_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
}

impl CellValue {
    pub fn text<T: Into<String>>(s: T) -> Self {
        CellValue::Text(s.into())
    }

    pub fn date(d: NaiveDate) -> Self {
        CellValue::Date(d.and_time(chrono::NaiveTime::MIN))
    }

    /// True for `Empty` and for text that is blank after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Plain string rendering used for display fields and exports.
    pub fn as_display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(dt) => dt.format(DATETIME_FORMAT).to_string(),
        }
    }

    /// Strict numeric coercion: numbers as-is, text trimmed and parsed.
    /// Anything else (including NaN and infinities) is `None`.
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Calendar date held by this cell, if any.
    ///
    /// Text with an explicit offset (RFC 3339) is converted into `tz` first;
    /// naive values are taken as already expressed in `tz`.
    pub fn to_date(&self, tz: &TimeZoneSetting) -> Option<NaiveDate> {
        match self {
            CellValue::Date(dt) => Some(dt.date()),
            CellValue::Text(s) => parse_text_date(s.trim(), tz),
            _ => None,
        }
    }
}

fn parse_text_date(s: &str, tz: &TimeZoneSetting) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }

    for fmt in TEXT_DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in TEXT_DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| tz.localize(&dt).date())
}

/// Render a number without a trailing `.0` when it is integral.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_display())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::date(d)
    }
}
