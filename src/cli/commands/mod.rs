pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod games;
pub mod init;
pub mod leaderboard;
pub mod log;
pub mod schedule;
pub mod triggers;

use crate::errors::{AppError, AppResult};
use crate::utils::date::{TimeZoneSetting, parse_date, parse_datetime};
use chrono::{NaiveDate, NaiveDateTime};

/// `--date` override, or today in the configured zone.
pub(crate) fn resolve_today(date: Option<&str>, tz: &TimeZoneSetting) -> AppResult<NaiveDate> {
    match date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(tz.today()),
    }
}

/// `--at` override, or the current wall-clock time in the configured zone.
pub(crate) fn resolve_now(at: Option<&str>, tz: &TimeZoneSetting) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(tz.now()),
    }
}
