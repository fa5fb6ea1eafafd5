//! Name-keyed score ledger on the `Leaderboard` sheet.

use crate::errors::{AppError, AppResult};
use crate::sheet::value::format_number;
use crate::sheet::{CellValue, ColumnMap, TableStore, ensure_schema};
use serde::{Serialize, Serializer};

pub const LEADERBOARD_SHEET: &str = "Leaderboard";
pub const COL_NAME: &str = "Name";
pub const COL_SCORE: &str = "Score";
pub const LEADERBOARD_COLUMNS: [&str; 2] = [COL_NAME, COL_SCORE];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    #[serde(serialize_with = "serialize_score")]
    pub score: f64,
}

impl LeaderboardEntry {
    pub fn score_display(&self) -> String {
        format_number(self.score)
    }
}

// 12.0 → 12 in JSON output
fn serialize_score<S: Serializer>(score: &f64, s: S) -> Result<S::Ok, S::Error> {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        s.serialize_i64(*score as i64)
    } else {
        s.serialize_f64(*score)
    }
}

/// Coerce a caller-supplied delta into a finite number.
pub fn parse_delta(delta: &CellValue) -> AppResult<f64> {
    delta.to_number().ok_or_else(|| {
        AppError::validation(format!(
            "score delta must be a finite number, got '{}'",
            delta.as_display()
        ))
    })
}

pub struct Leaderboard<'a, S: TableStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: TableStore + ?Sized> Leaderboard<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Every named row, in storage order. Non-numeric scores read as 0.
    pub fn get_leaderboard(&mut self) -> AppResult<Vec<LeaderboardEntry>> {
        let (cols, rows) = self.load()?;

        Ok(rows
            .iter()
            .skip(1)
            .filter_map(|row| {
                let name = cols.cell(row, COL_NAME).as_display();
                if name.trim().is_empty() {
                    return None;
                }
                Some(LeaderboardEntry {
                    name,
                    score: cols.cell(row, COL_SCORE).to_number().unwrap_or(0.0),
                })
            })
            .collect())
    }

    /// Add `delta` to `name`'s score, creating the entry when missing.
    ///
    /// Matching is on the trimmed name, case-sensitive; with duplicate rows
    /// the first one in storage order is updated. Returns the refreshed board.
    pub fn record_score<D: Into<CellValue>>(
        &mut self,
        name: &str,
        delta: D,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("player name must not be empty"));
        }
        let delta = parse_delta(&delta.into())?;

        let (cols, rows) = self.load()?;
        let (name_col, score_col) = match (cols.index(COL_NAME), cols.index(COL_SCORE)) {
            (Some(n), Some(s)) => (n, s),
            _ => return Err(AppError::schema(LEADERBOARD_SHEET, COL_SCORE)),
        };

        let existing = rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| cols.cell(row, COL_NAME).as_display().trim() == name);

        match existing {
            Some((row_idx, row)) => {
                let current = cols.cell(row, COL_SCORE).to_number().unwrap_or(0.0);
                self.store.write_cell(
                    LEADERBOARD_SHEET,
                    row_idx,
                    score_col,
                    CellValue::Number(current + delta),
                )?;
            }
            None => {
                let mut new_row = vec![CellValue::Empty; cols.width()];
                new_row[name_col] = CellValue::text(name);
                new_row[score_col] = CellValue::Number(delta);
                self.store.append_row(LEADERBOARD_SHEET, &new_row)?;
            }
        }

        self.get_leaderboard()
    }

    fn load(&mut self) -> AppResult<(ColumnMap, Vec<Vec<CellValue>>)> {
        ensure_schema(&mut *self.store, LEADERBOARD_SHEET, &LEADERBOARD_COLUMNS)?;
        let rows = self.store.read_all(LEADERBOARD_SHEET)?;

        let header = rows.first().map(Vec::as_slice).unwrap_or(&[]);
        let cols = ColumnMap::resolve(LEADERBOARD_SHEET, header, &LEADERBOARD_COLUMNS)?;
        Ok((cols, rows))
    }
}
