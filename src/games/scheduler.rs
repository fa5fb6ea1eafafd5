use super::flag::ActiveFlag;
use super::model::*;
use super::week::AcceptableStarts;
use crate::errors::AppResult;
use crate::sheet::{CellValue, ColumnMap, TableStore, ensure_sheet_with_header};
use crate::utils::date::TimeZoneSetting;
use chrono::{Datelike, NaiveDate, Weekday};

/// Result of one activation flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipOutcome {
    pub window: AcceptableStarts,
    pub rows: usize,
    pub active: usize,
}

/// Weekly games rotation over the `Games` sheet.
///
/// Holds no state besides the store handle: every call re-reads the sheet.
pub struct GameScheduler<'a, S: TableStore + ?Sized> {
    store: &'a mut S,
    tz: TimeZoneSetting,
}

impl<'a, S: TableStore + ?Sized> GameScheduler<'a, S> {
    pub fn new(store: &'a mut S, tz: TimeZoneSetting) -> Self {
        Self { store, tz }
    }

    /// Games whose flag is set and whose week matches the current window.
    pub fn get_active_games(&mut self) -> AppResult<Vec<ActiveGame>> {
        let today = self.tz.today();
        self.active_games_on(today)
    }

    pub fn active_games_on(&mut self, today: NaiveDate) -> AppResult<Vec<ActiveGame>> {
        let window = AcceptableStarts::for_date(today);
        let (cols, rows) = self.load(&GAMES_COLUMNS)?;

        let games = rows
            .iter()
            .skip(1)
            .filter(|row| ActiveFlag::parse(cols.cell(row, COL_IS_ACTIVE)).is_active())
            .filter(|row| window.matches(cols.cell(row, COL_WEEK_START), &self.tz))
            .map(|row| ActiveGame {
                week_start: self.format_week_start(cols.cell(row, COL_WEEK_START)),
                title: cols.cell(row, COL_TITLE).as_display(),
                prompt: cols.cell(row, COL_PROMPT).as_display(),
                instructions: cols.cell(row, COL_INSTRUCTIONS).as_display(),
                input_placeholder: cols.cell(row, COL_INPUT_PLACEHOLDER).as_display(),
            })
            .collect();

        Ok(games)
    }

    /// Rewrite `IsActive` on every row for the current window.
    pub fn flip_game_activity(&mut self) -> AppResult<()> {
        let today = self.tz.today();
        self.flip_on(today)?;
        Ok(())
    }

    /// Full overwrite of the `IsActive` column: `true` where `WeekStart`
    /// falls in the window of `today`, `false` everywhere else.
    pub fn flip_on(&mut self, today: NaiveDate) -> AppResult<FlipOutcome> {
        let window = AcceptableStarts::for_date(today);
        let (cols, rows) = self.load(&[COL_WEEK_START, COL_IS_ACTIVE])?;

        let flags: Vec<CellValue> = rows
            .iter()
            .skip(1)
            .map(|row| CellValue::Bool(window.matches(cols.cell(row, COL_WEEK_START), &self.tz)))
            .collect();

        let active = flags
            .iter()
            .filter(|f| matches!(f, CellValue::Bool(true)))
            .count();

        if !flags.is_empty()
            && let Some(col) = cols.index(COL_IS_ACTIVE)
        {
            self.store.write_column(GAMES_SHEET, col, 1, &flags)?;
        }

        Ok(FlipOutcome {
            window,
            rows: flags.len(),
            active,
        })
    }

    /// Every data row, in storage order. Blank rows are skipped.
    pub fn list_games(&mut self) -> AppResult<Vec<GameRecord>> {
        let (cols, rows) = self.load(&GAMES_COLUMNS)?;

        Ok(rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| !row.iter().all(CellValue::is_blank))
            .map(|(i, row)| GameRecord {
                row: i + 1,
                week_start: self.format_week_start(cols.cell(row, COL_WEEK_START)),
                title: cols.cell(row, COL_TITLE).as_display(),
                prompt: cols.cell(row, COL_PROMPT).as_display(),
                instructions: cols.cell(row, COL_INSTRUCTIONS).as_display(),
                input_placeholder: cols.cell(row, COL_INPUT_PLACEHOLDER).as_display(),
                is_active: ActiveFlag::parse(cols.cell(row, COL_IS_ACTIVE)),
            })
            .collect())
    }

    /// Append a game row, placing each field under its header column.
    pub fn add_game(&mut self, game: &NewGame) -> AppResult<()> {
        let (cols, _) = self.load(&GAMES_COLUMNS)?;

        let mut row = vec![CellValue::Empty; cols.width()];
        for name in GAMES_COLUMNS {
            if let Some(idx) = cols.index(name) {
                row[idx] = game.cell_for(name);
            }
        }

        self.store.append_row(GAMES_SHEET, &row)
    }

    fn load(&mut self, required: &[&str]) -> AppResult<(ColumnMap, Vec<Vec<CellValue>>)> {
        ensure_sheet_with_header(&mut *self.store, GAMES_SHEET, &GAMES_COLUMNS)?;
        let rows = self.store.read_all(GAMES_SHEET)?;

        let header = rows.first().map(Vec::as_slice).unwrap_or(&[]);
        let cols = ColumnMap::resolve(GAMES_SHEET, header, required)?;
        Ok((cols, rows))
    }

    /// `YYYY-MM-DD` in the configured zone, empty when the cell is not a date.
    fn format_week_start(&self, cell: &CellValue) -> String {
        cell.to_date(&self.tz)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Whether a writer-supplied week start sits on one of the days the window
/// can match.
pub fn is_conventional_week_start(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Mon | Weekday::Fri)
}
