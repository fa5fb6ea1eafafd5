use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Time zone used to decide "today" and to render dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Accepts `local`, `UTC`/`Z`, or an offset such as `+02:00`, `-0530`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let raw = s.trim();

        if raw.eq_ignore_ascii_case("local") || raw.is_empty() {
            return Ok(TimeZoneSetting::Local);
        }
        if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
            return FixedOffset::east_opt(0)
                .map(TimeZoneSetting::Fixed)
                .ok_or_else(|| AppError::InvalidTimeZone(s.to_string()));
        }

        parse_offset(raw)
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(|| AppError::InvalidTimeZone(s.to_string()))
    }

    /// Current wall-clock time in this zone.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            TimeZoneSetting::Local => Local::now().naive_local(),
            TimeZoneSetting::Fixed(off) => Utc::now().with_timezone(off).naive_local(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Express an offset-aware instant as wall-clock time in this zone.
    pub fn localize(&self, dt: &DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            TimeZoneSetting::Local => dt.with_timezone(&Local).naive_local(),
            TimeZoneSetting::Fixed(off) => dt.with_timezone(off).naive_local(),
        }
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => write!(f, "local"),
            TimeZoneSetting::Fixed(off) => write!(f, "{}", off),
        }
    }
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[0..2].parse().ok()?;
    let minutes: i32 = digits[2..4].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM[:SS]` or a bare date (midnight).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for fmt in formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date(s).map(|d| d.and_time(chrono::NaiveTime::MIN))
}
