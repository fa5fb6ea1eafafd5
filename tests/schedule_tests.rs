use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Weekday};
use rscoreboard::db::pool::DbPool;
use rscoreboard::errors::AppError;
use rscoreboard::games::GAMES_SHEET;
use rscoreboard::schedule::{
    FLIP_HANDLER, FireResult, Trigger, TriggerRegistry, register_once, run_due_triggers,
    schedule_weekly_activation_trigger,
};
use rscoreboard::sheet::{CellValue, MemoryStore, TableStore};
use rscoreboard::utils::date::TimeZoneSetting;

mod common;
use common::{game_row, games_header};

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn utc() -> TimeZoneSetting {
    TimeZoneSetting::Fixed(FixedOffset::east_opt(0).unwrap())
}

fn store_with_games() -> MemoryStore {
    let monday = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
    MemoryStore::new().with_rows(
        GAMES_SHEET,
        vec![
            games_header(),
            game_row(CellValue::date(monday), "This week", CellValue::Bool(false)),
        ],
    )
}

#[test]
fn test_schedule_registers_once_and_flips_now() {
    let mut store = store_with_games();

    let first = schedule_weekly_activation_trigger(&mut store, utc(), 9, at(2025, 6, 17, 8)).unwrap();
    assert!(first.registered);
    assert_eq!(first.flip.active, 1);
    assert_eq!(
        store.read_all(GAMES_SHEET).unwrap()[1][5],
        CellValue::Bool(true)
    );

    let second =
        schedule_weekly_activation_trigger(&mut store, utc(), 9, at(2025, 6, 17, 8)).unwrap();
    assert!(!second.registered);

    let triggers = store.triggers().unwrap();
    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].handler, FLIP_HANDLER);
    assert_eq!(triggers[0].weekday, Weekday::Fri);
    assert_eq!(triggers[0].hour, 9);
}

#[test]
fn test_schedule_rejects_invalid_hour() {
    let mut store = store_with_games();
    let err = schedule_weekly_activation_trigger(&mut store, utc(), 24, at(2025, 6, 17, 8))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(store.triggers().unwrap().is_empty());
}

#[test]
fn test_schedule_bootstraps_missing_games_sheet() {
    let mut store = MemoryStore::new();
    let outcome =
        schedule_weekly_activation_trigger(&mut store, utc(), 9, at(2025, 6, 17, 8)).unwrap();

    assert_eq!(outcome.flip.rows, 0);
    assert_eq!(store.read_all(GAMES_SHEET).unwrap(), vec![games_header()]);
}

#[test]
fn test_trigger_due_only_on_friday_after_hour() {
    let t = Trigger::weekly(FLIP_HANDLER, Weekday::Fri, 9);

    assert!(!t.is_due(at(2025, 6, 19, 10))); // giovedì
    assert!(!t.is_due(at(2025, 6, 20, 8)));
    assert!(t.is_due(at(2025, 6, 20, 9)));
    assert!(t.is_due(at(2025, 6, 20, 23)));
}

#[test]
fn test_run_due_fires_once_per_day() {
    let mut store = store_with_games();
    register_once(&mut store, &Trigger::weekly(FLIP_HANDLER, Weekday::Fri, 9)).unwrap();

    // venerdì 2025-06-20: finestra lunedì 2025-06-16
    let fired = run_due_triggers(&mut store, utc(), at(2025, 6, 20, 9)).unwrap();
    assert_eq!(fired.len(), 1);
    assert!(matches!(fired[0].result, FireResult::Flipped(o) if o.active == 1));

    let again = run_due_triggers(&mut store, utc(), at(2025, 6, 20, 15)).unwrap();
    assert!(again.is_empty());

    // il venerdì successivo la riga esce dalla finestra
    let next = run_due_triggers(&mut store, utc(), at(2025, 6, 27, 10)).unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(
        store.read_all(GAMES_SHEET).unwrap()[1][5],
        CellValue::Bool(false)
    );
}

#[test]
fn test_unknown_handler_is_reported_not_fired() {
    let mut store = store_with_games();
    store
        .register(&Trigger::weekly("somethingElse", Weekday::Fri, 0))
        .unwrap();

    let fired = run_due_triggers(&mut store, utc(), at(2025, 6, 20, 9)).unwrap();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].result, FireResult::UnknownHandler);
    assert!(store.triggers().unwrap()[0].last_fired.is_none());
}

#[test]
fn test_sqlite_registry_roundtrip() {
    let mut pool = DbPool::in_memory().unwrap();
    let outcome =
        schedule_weekly_activation_trigger(&mut pool, utc(), 7, at(2025, 6, 17, 8)).unwrap();
    assert!(outcome.registered);

    let fired = run_due_triggers(&mut pool, utc(), at(2025, 6, 20, 7)).unwrap();
    assert_eq!(fired.len(), 1);

    let triggers = pool.triggers().unwrap();
    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].weekday, Weekday::Fri);
    assert_eq!(triggers[0].last_fired, Some(at(2025, 6, 20, 7)));

    let err = pool.mark_fired("missing", at(2025, 6, 20, 7)).unwrap_err();
    assert!(matches!(err, AppError::Trigger(_)));
}
