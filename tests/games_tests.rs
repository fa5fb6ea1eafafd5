use chrono::{FixedOffset, NaiveDate};
use rscoreboard::db::pool::DbPool;
use rscoreboard::errors::AppError;
use rscoreboard::games::{GAMES_SHEET, GameScheduler, NewGame};
use rscoreboard::sheet::{CellValue, MemoryStore, TableStore};
use rscoreboard::utils::date::TimeZoneSetting;

mod common;
use common::{game_row, games_header, text};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn utc() -> TimeZoneSetting {
    TimeZoneSetting::Fixed(FixedOffset::east_opt(0).unwrap())
}

// martedì: venerdì 2025-06-20, lunedì 2025-06-16
fn tuesday() -> NaiveDate {
    d(2025, 6, 17)
}

fn seeded() -> MemoryStore {
    MemoryStore::new().with_rows(
        GAMES_SHEET,
        vec![
            games_header(),
            game_row(CellValue::date(d(2025, 6, 16)), "Monday game", CellValue::Bool(true)),
            game_row(text("2025-06-20"), "Friday game", text("yes")),
            game_row(CellValue::date(d(2025, 6, 9)), "Old game", CellValue::Bool(true)),
            game_row(CellValue::date(d(2025, 6, 16)), "Parked game", CellValue::Bool(false)),
        ],
    )
}

fn flags(store: &impl TableStore) -> Vec<CellValue> {
    store
        .read_all(GAMES_SHEET)
        .unwrap()
        .into_iter()
        .skip(1)
        .map(|r| r[5].clone())
        .collect()
}

#[test]
fn test_active_games_match_monday_and_friday() {
    let mut store = seeded();
    let games = GameScheduler::new(&mut store, utc())
        .active_games_on(tuesday())
        .unwrap();

    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Monday game", "Friday game"]);
    assert_eq!(games[0].week_start, "2025-06-16");
    assert_eq!(games[1].week_start, "2025-06-20");
    assert_eq!(games[0].prompt, "Monday game prompt");
}

#[test]
fn test_flip_rewrites_every_flag() {
    let mut store = seeded();
    let outcome = GameScheduler::new(&mut store, utc())
        .flip_on(tuesday())
        .unwrap();

    assert_eq!(outcome.rows, 4);
    assert_eq!(outcome.active, 3);
    assert_eq!(outcome.window.monday, d(2025, 6, 16));
    assert_eq!(
        flags(&store),
        [
            CellValue::Bool(true),
            CellValue::Bool(true),
            CellValue::Bool(false),
            CellValue::Bool(true),
        ]
    );
}

#[test]
fn test_flip_is_idempotent() {
    let mut store = seeded();
    GameScheduler::new(&mut store, utc()).flip_on(tuesday()).unwrap();
    let first = store.read_all(GAMES_SHEET).unwrap();

    GameScheduler::new(&mut store, utc()).flip_on(tuesday()).unwrap();
    assert_eq!(store.read_all(GAMES_SHEET).unwrap(), first);
}

#[test]
fn test_flip_then_active_lists_parked_game_too() {
    let mut store = seeded();
    let mut scheduler = GameScheduler::new(&mut store, utc());
    scheduler.flip_on(tuesday()).unwrap();

    let titles: Vec<String> = scheduler
        .active_games_on(tuesday())
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, ["Monday game", "Friday game", "Parked game"]);
}

#[test]
fn test_header_only_sheet() {
    let mut store = MemoryStore::new().with_rows(GAMES_SHEET, vec![games_header()]);
    let mut scheduler = GameScheduler::new(&mut store, utc());

    assert!(scheduler.active_games_on(tuesday()).unwrap().is_empty());
    let outcome = scheduler.flip_on(tuesday()).unwrap();
    assert_eq!(outcome.rows, 0);
    assert_eq!(store.read_all(GAMES_SHEET).unwrap(), vec![games_header()]);
}

#[test]
fn test_missing_sheet_is_bootstrapped_with_bold_header() {
    let mut store = MemoryStore::new();
    let games = GameScheduler::new(&mut store, utc())
        .active_games_on(tuesday())
        .unwrap();

    assert!(games.is_empty());
    assert_eq!(store.read_all(GAMES_SHEET).unwrap(), vec![games_header()]);
    assert!(store.header_is_bold(GAMES_SHEET));
}

#[test]
fn test_missing_is_active_column_is_a_schema_error() {
    let header: Vec<CellValue> = games_header().into_iter().take(5).collect();
    let row = vec![
        CellValue::date(d(2025, 6, 16)),
        text("Monday game"),
        text(""),
        text(""),
        text(""),
    ];
    let mut store = MemoryStore::new().with_rows(GAMES_SHEET, vec![header, row]);
    let before = store.read_all(GAMES_SHEET).unwrap();

    let err = GameScheduler::new(&mut store, utc())
        .active_games_on(tuesday())
        .unwrap_err();
    assert!(matches!(err, AppError::Schema { ref column, .. } if column == "IsActive"));

    let err = GameScheduler::new(&mut store, utc())
        .flip_on(tuesday())
        .unwrap_err();
    assert!(matches!(err, AppError::Schema { ref column, .. } if column == "IsActive"));

    assert_eq!(store.read_all(GAMES_SHEET).unwrap(), before);
}

#[test]
fn test_unparseable_and_numeric_dates_never_match() {
    let mut store = MemoryStore::new().with_rows(
        GAMES_SHEET,
        vec![
            games_header(),
            game_row(text("not a date"), "Broken", CellValue::Bool(true)),
            game_row(CellValue::Number(45824.0), "Serial", CellValue::Bool(true)),
            game_row(CellValue::Empty, "Blank", CellValue::Bool(true)),
        ],
    );

    let mut scheduler = GameScheduler::new(&mut store, utc());
    assert!(scheduler.active_games_on(tuesday()).unwrap().is_empty());

    let outcome = scheduler.flip_on(tuesday()).unwrap();
    assert_eq!(outcome.active, 0);
    assert!(flags(&store).iter().all(|f| *f == CellValue::Bool(false)));
}

#[test]
fn test_offset_timestamp_is_read_in_configured_zone() {
    // 23:30 a -02:00 è già lunedì in UTC
    let mut store = MemoryStore::new().with_rows(
        GAMES_SHEET,
        vec![
            games_header(),
            game_row(text("2025-06-15T23:30:00-02:00"), "Late night", text("true")),
        ],
    );

    let games = GameScheduler::new(&mut store, utc())
        .active_games_on(tuesday())
        .unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].week_start, "2025-06-16");
}

#[test]
fn test_unrecognized_flag_is_inactive() {
    let mut store = MemoryStore::new().with_rows(
        GAMES_SHEET,
        vec![
            games_header(),
            game_row(CellValue::date(d(2025, 6, 16)), "Maybe", text("maybe")),
        ],
    );

    let mut scheduler = GameScheduler::new(&mut store, utc());
    assert!(scheduler.active_games_on(tuesday()).unwrap().is_empty());

    let listed = scheduler.list_games().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].row, 2);
    assert_eq!(listed[0].is_active.as_str(), "?");
}

#[test]
fn test_add_game_follows_header_order() {
    let header: Vec<CellValue> = ["Title", "WeekStart", "IsActive", "Prompt", "Instructions", "InputPlaceholder"]
        .iter()
        .map(|c| text(c))
        .collect();
    let mut store = MemoryStore::new().with_rows(GAMES_SHEET, vec![header]);

    let game = NewGame {
        week_start: d(2025, 6, 16),
        title: "Reordered".to_string(),
        prompt: "p".to_string(),
        instructions: String::new(),
        input_placeholder: String::new(),
        is_active: true,
    };
    GameScheduler::new(&mut store, utc()).add_game(&game).unwrap();

    let rows = store.read_all(GAMES_SHEET).unwrap();
    assert_eq!(rows[1][0], text("Reordered"));
    assert_eq!(rows[1][1], CellValue::date(d(2025, 6, 16)));
    assert_eq!(rows[1][2], CellValue::Bool(true));

    let games = GameScheduler::new(&mut store, utc())
        .active_games_on(tuesday())
        .unwrap();
    assert_eq!(games[0].title, "Reordered");
}

#[test]
fn test_sqlite_store_active_and_flip() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut scheduler = GameScheduler::new(&mut pool, utc());

    for (week, title, active) in [
        (d(2025, 6, 16), "Monday game", true),
        (d(2025, 6, 9), "Old game", true),
    ] {
        scheduler
            .add_game(&NewGame {
                week_start: week,
                title: title.to_string(),
                prompt: String::new(),
                instructions: String::new(),
                input_placeholder: String::new(),
                is_active: active,
            })
            .unwrap();
    }

    let titles: Vec<String> = scheduler
        .active_games_on(tuesday())
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, ["Monday game"]);

    let outcome = scheduler.flip_on(tuesday()).unwrap();
    assert_eq!((outcome.rows, outcome.active), (2, 1));
    assert_eq!(flags(&pool), [CellValue::Bool(true), CellValue::Bool(false)]);
    assert!(pool.is_bold(GAMES_SHEET, 0, 0).unwrap());
}

#[test]
fn test_clock_based_entry_points_on_empty_sheet() {
    let mut store = MemoryStore::new();
    let mut scheduler = GameScheduler::new(&mut store, TimeZoneSetting::Local);

    scheduler.flip_game_activity().unwrap();
    assert!(scheduler.get_active_games().unwrap().is_empty());
}
