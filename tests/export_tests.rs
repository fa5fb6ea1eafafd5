use rscoreboard::errors::AppError;
use rscoreboard::export::{ExportFormat, ExportLogic, SheetKind};
use rscoreboard::leaderboard::LEADERBOARD_SHEET;
use rscoreboard::sheet::{CellValue, MemoryStore};

mod common;
use common::{temp_out, text};

fn board() -> MemoryStore {
    MemoryStore::new().with_rows(
        LEADERBOARD_SHEET,
        vec![
            vec![text("Name"), text("Score")],
            vec![text("Ann"), CellValue::Number(8.0)],
            vec![CellValue::Empty, CellValue::Empty],
            vec![text("Bob"), text("lots")],
        ],
    )
}

#[test]
fn test_snapshot_keeps_raw_cells_and_drops_blank_rows() {
    let mut store = board();
    let snap = ExportLogic::snapshot(&mut store, SheetKind::Leaderboard).unwrap();

    assert_eq!(snap.headers, ["Name", "Score"]);
    assert_eq!(snap.rows.len(), 2);
    assert_eq!(snap.rows[1][1], text("lots"));
}

#[test]
fn test_snapshot_of_missing_sheet_has_header_only() {
    let mut store = MemoryStore::new();
    let snap = ExportLogic::snapshot(&mut store, SheetKind::Games).unwrap();
    assert_eq!(snap.headers.len(), 6);
    assert!(snap.rows.is_empty());
}

#[test]
fn test_export_xlsx_writes_file() {
    let mut store = board();
    let out = temp_out("export_xlsx_board", "xlsx");

    let rows = ExportLogic::export(
        &mut store,
        SheetKind::Leaderboard,
        ExportFormat::Xlsx,
        &out,
        true,
    )
    .unwrap();

    assert_eq!(rows, 2);
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn test_export_json_is_keyed_by_header() {
    let mut store = board();
    let out = temp_out("export_json_board", "json");

    ExportLogic::export(&mut store, SheetKind::Leaderboard, ExportFormat::Json, &out, true)
        .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed[0]["Name"], "Ann");
    assert_eq!(parsed[0]["Score"], 8.0);
    assert_eq!(parsed[1]["Score"], "lots");
}

#[test]
fn test_export_requires_absolute_path() {
    let mut store = board();
    let err = ExportLogic::export(
        &mut store,
        SheetKind::Leaderboard,
        ExportFormat::Csv,
        "relative.csv",
        true,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
}
