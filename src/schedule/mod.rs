//! Weekly trigger registration and the runner that fires due triggers.

pub mod sqlite;

use crate::errors::{AppError, AppResult};
use crate::games::{FlipOutcome, GAMES_COLUMNS, GAMES_SHEET, GameScheduler};
use crate::sheet::{TableStore, ensure_schema};
use crate::utils::date::TimeZoneSetting;
use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Handler name of the weekly activation flip.
pub const FLIP_HANDLER: &str = "flipGameActivity";

/// Default hour for the Friday flip.
pub const DEFAULT_TRIGGER_HOUR: u32 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigger {
    pub handler: String,
    pub weekday: Weekday,
    pub hour: u32,
    pub created_at: String,
    pub last_fired: Option<NaiveDateTime>,
}

impl Trigger {
    pub fn weekly(handler: &str, weekday: Weekday, hour: u32) -> Self {
        Self {
            handler: handler.to_string(),
            weekday,
            hour,
            created_at: Local::now().to_rfc3339(),
            last_fired: None,
        }
    }

    /// Due on its weekday, at or after its hour, at most once per day.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        now.weekday() == self.weekday
            && now.hour() >= self.hour
            && self.last_fired.map(|lf| lf.date() < now.date()).unwrap_or(true)
    }
}

/// Registry of recurring invocations, keyed by handler name.
pub trait TriggerRegistry {
    fn triggers(&self) -> AppResult<Vec<Trigger>>;

    /// Store a new registration. Does not check for duplicates.
    fn register(&mut self, trigger: &Trigger) -> AppResult<()>;

    fn mark_fired(&mut self, handler: &str, at: NaiveDateTime) -> AppResult<()>;
}

/// Register `trigger` unless one with the same handler already exists.
/// Returns `true` when a new registration was created.
pub fn register_once<R: TriggerRegistry + ?Sized>(
    registry: &mut R,
    trigger: &Trigger,
) -> AppResult<bool> {
    if registry
        .triggers()?
        .iter()
        .any(|t| t.handler == trigger.handler)
    {
        return Ok(false);
    }
    registry.register(trigger)?;
    Ok(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOutcome {
    pub registered: bool,
    pub flip: FlipOutcome,
}

/// Register the Friday flip (once), bootstrap the Games header and run one
/// flip right away for `now`.
pub fn schedule_weekly_activation_trigger<S>(
    store: &mut S,
    tz: TimeZoneSetting,
    hour: u32,
    now: NaiveDateTime,
) -> AppResult<ScheduleOutcome>
where
    S: TableStore + TriggerRegistry + ?Sized,
{
    if hour > 23 {
        return Err(AppError::validation(format!(
            "trigger hour must be between 0 and 23, got {hour}"
        )));
    }

    let trigger = Trigger::weekly(FLIP_HANDLER, Weekday::Fri, hour);
    let registered = register_once(&mut *store, &trigger)?;

    ensure_schema(&mut *store, GAMES_SHEET, &GAMES_COLUMNS)?;
    let flip = GameScheduler::new(&mut *store, tz).flip_on(now.date())?;

    Ok(ScheduleOutcome { registered, flip })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireResult {
    Flipped(FlipOutcome),
    UnknownHandler,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredTrigger {
    pub handler: String,
    pub result: FireResult,
}

/// Fire every registered trigger that is due at `now`.
///
/// Unknown handlers are reported but not marked as fired. Failures of a
/// known handler abort the run.
pub fn run_due_triggers<S>(
    store: &mut S,
    tz: TimeZoneSetting,
    now: NaiveDateTime,
) -> AppResult<Vec<FiredTrigger>>
where
    S: TableStore + TriggerRegistry + ?Sized,
{
    let due: Vec<Trigger> = store
        .triggers()?
        .into_iter()
        .filter(|t| t.is_due(now))
        .collect();

    let mut fired = Vec::new();
    for trigger in due {
        let result = match trigger.handler.as_str() {
            FLIP_HANDLER => {
                let outcome = GameScheduler::new(&mut *store, tz).flip_on(now.date())?;
                store.mark_fired(&trigger.handler, now)?;
                FireResult::Flipped(outcome)
            }
            _ => FireResult::UnknownHandler,
        };

        fired.push(FiredTrigger {
            handler: trigger.handler,
            result,
        });
    }

    Ok(fired)
}

/// Parse a weekday name (`Fri`, `friday`, …).
pub fn parse_weekday(s: &str) -> AppResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::Trigger(format!("Invalid weekday: {s}")))
}
