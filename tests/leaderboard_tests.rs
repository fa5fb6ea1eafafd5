use rscoreboard::db::pool::DbPool;
use rscoreboard::errors::AppError;
use rscoreboard::leaderboard::{LEADERBOARD_SHEET, Leaderboard, LeaderboardEntry};
use rscoreboard::sheet::{CellValue, MemoryStore, TableStore};

mod common;
use common::text;

fn entry(name: &str, score: f64) -> LeaderboardEntry {
    LeaderboardEntry {
        name: name.to_string(),
        score,
    }
}

fn header() -> Vec<CellValue> {
    vec![text("Name"), text("Score")]
}

#[test]
fn test_record_accumulates_on_single_row() {
    let mut store = MemoryStore::new();
    let mut board = Leaderboard::new(&mut store);

    board.record_score("Ann", 5).unwrap();
    let result = board.record_score("Ann", 3.5).unwrap();

    assert_eq!(result, vec![entry("Ann", 8.5)]);
    assert_eq!(store.read_all(LEADERBOARD_SHEET).unwrap().len(), 2);
}

#[test]
fn test_new_names_are_appended_in_order() {
    let mut store = MemoryStore::new();
    let mut board = Leaderboard::new(&mut store);

    board.record_score("Ann", 1).unwrap();
    board.record_score("Bob", -2).unwrap();
    let result = board.record_score("  Ann ", 4).unwrap();

    assert_eq!(result, vec![entry("Ann", 5.0), entry("Bob", -2.0)]);
}

#[test]
fn test_numeric_text_delta_is_accepted() {
    let mut store = MemoryStore::new();
    let result = Leaderboard::new(&mut store)
        .record_score("Ann", " 12 ")
        .unwrap();
    assert_eq!(result, vec![entry("Ann", 12.0)]);
}

#[test]
fn test_invalid_input_leaves_board_unchanged() {
    let mut store = MemoryStore::new().with_rows(
        LEADERBOARD_SHEET,
        vec![header(), vec![text("Ann"), CellValue::Number(3.0)]],
    );
    let before = store.read_all(LEADERBOARD_SHEET).unwrap();
    let mut board = Leaderboard::new(&mut store);

    for err in [
        board.record_score("   ", 1).unwrap_err(),
        board.record_score("Ann", "not-a-number").unwrap_err(),
        board.record_score("Ann", "").unwrap_err(),
        board.record_score("Ann", f64::NAN).unwrap_err(),
        board.record_score("Ann", f64::INFINITY).unwrap_err(),
        board.record_score("Ann", true).unwrap_err(),
    ] {
        assert!(matches!(err, AppError::Validation(_)), "{err}");
    }

    assert_eq!(store.read_all(LEADERBOARD_SHEET).unwrap(), before);
}

#[test]
fn test_duplicate_names_update_first_row_only() {
    let mut store = MemoryStore::new().with_rows(
        LEADERBOARD_SHEET,
        vec![
            header(),
            vec![text("Ann"), CellValue::Number(1.0)],
            vec![text("Bob"), CellValue::Number(2.0)],
            vec![text("Ann"), CellValue::Number(10.0)],
        ],
    );

    let result = Leaderboard::new(&mut store).record_score("Ann", 1).unwrap();
    assert_eq!(
        result,
        vec![entry("Ann", 2.0), entry("Bob", 2.0), entry("Ann", 10.0)]
    );
}

#[test]
fn test_non_numeric_scores_read_as_zero() {
    let mut store = MemoryStore::new().with_rows(
        LEADERBOARD_SHEET,
        vec![
            header(),
            vec![text("Ann"), text("lots")],
            vec![text("Bob"), CellValue::Empty],
            vec![text("Cid"), CellValue::Bool(true)],
            vec![text("Dee"), text("7")],
        ],
    );

    let mut board = Leaderboard::new(&mut store);
    assert_eq!(
        board.get_leaderboard().unwrap(),
        vec![
            entry("Ann", 0.0),
            entry("Bob", 0.0),
            entry("Cid", 0.0),
            entry("Dee", 7.0),
        ]
    );

    let result = board.record_score("Ann", 2).unwrap();
    assert_eq!(result[0], entry("Ann", 2.0));
}

#[test]
fn test_blank_names_are_skipped() {
    let mut store = MemoryStore::new().with_rows(
        LEADERBOARD_SHEET,
        vec![
            header(),
            vec![text("  "), CellValue::Number(4.0)],
            vec![text("Ann"), CellValue::Number(1.0)],
        ],
    );
    let result = Leaderboard::new(&mut store).get_leaderboard().unwrap();
    assert_eq!(result, vec![entry("Ann", 1.0)]);
}

#[test]
fn test_empty_and_header_only_board() {
    let mut store = MemoryStore::new();
    assert!(Leaderboard::new(&mut store).get_leaderboard().unwrap().is_empty());
    assert_eq!(store.read_all(LEADERBOARD_SHEET).unwrap(), vec![header()]);
    assert!(store.header_is_bold(LEADERBOARD_SHEET));

    let mut store = MemoryStore::new().with_rows(LEADERBOARD_SHEET, vec![header()]);
    assert!(Leaderboard::new(&mut store).get_leaderboard().unwrap().is_empty());
}

#[test]
fn test_wrong_header_is_repaired() {
    let mut store = MemoryStore::new().with_rows(
        LEADERBOARD_SHEET,
        vec![
            vec![text("Player"), text("Points")],
            vec![text("Ann"), CellValue::Number(3.0)],
        ],
    );

    let result = Leaderboard::new(&mut store).get_leaderboard().unwrap();
    assert_eq!(result, vec![entry("Ann", 3.0)]);
    assert_eq!(store.read_all(LEADERBOARD_SHEET).unwrap()[0], header());
    assert!(store.header_is_bold(LEADERBOARD_SHEET));
}

#[test]
fn test_sqlite_store_keeps_scores() {
    let mut pool = DbPool::in_memory().unwrap();

    Leaderboard::new(&mut pool).record_score("Ann", 5).unwrap();
    Leaderboard::new(&mut pool).record_score("Bob", 2).unwrap();
    let result = Leaderboard::new(&mut pool).record_score("Ann", -1).unwrap();

    assert_eq!(result, vec![entry("Ann", 4.0), entry("Bob", 2.0)]);
    assert!(pool.is_bold(LEADERBOARD_SHEET, 0, 1).unwrap());
    assert!(!pool.is_bold(LEADERBOARD_SHEET, 1, 0).unwrap());
}

#[test]
fn test_json_scores_are_integral_when_possible() {
    let json = serde_json::to_string(&vec![entry("Ann", 8.0), entry("Bob", 1.5)]).unwrap();
    assert_eq!(json, r#"[{"name":"Ann","score":8},{"name":"Bob","score":1.5}]"#);
}
