#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rscoreboard::sheet::CellValue;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsb() -> Command {
    cargo_bin_cmd!("rscoreboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rscoreboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `--test init` on a fresh DB
pub fn init_db(db_path: &str) {
    rsb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn text(s: &str) -> CellValue {
    CellValue::text(s)
}

pub fn games_header() -> Vec<CellValue> {
    rscoreboard::games::GAMES_COLUMNS
        .iter()
        .map(|c| text(c))
        .collect()
}

/// A Games row with the columns in bootstrap order.
pub fn game_row(week_start: CellValue, title: &str, active: CellValue) -> Vec<CellValue> {
    vec![
        week_start,
        text(title),
        text(&format!("{title} prompt")),
        text(""),
        text(""),
        active,
    ]
}
