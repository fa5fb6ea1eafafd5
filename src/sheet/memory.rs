//! In-memory implementation of the storage ports. Nothing survives the
//! process; handy for embedding and for tests.

use super::{CellValue, TableStore};
use crate::errors::{AppError, AppResult};
use crate::schedule::{Trigger, TriggerRegistry};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
struct MemorySheet {
    rows: Vec<Vec<CellValue>>,
    bold_header: bool,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    sheets: BTreeMap<String, MemorySheet>,
    triggers: Vec<Trigger>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sheet with raw rows (header included), replacing it if present.
    pub fn with_rows(mut self, sheet: &str, rows: Vec<Vec<CellValue>>) -> Self {
        self.sheets.insert(
            sheet.to_string(),
            MemorySheet {
                rows,
                bold_header: false,
            },
        );
        self
    }

    pub fn header_is_bold(&self, sheet: &str) -> bool {
        self.sheets.get(sheet).map(|s| s.bold_header).unwrap_or(false)
    }

    fn sheet_mut(&mut self, sheet: &str) -> AppResult<&mut MemorySheet> {
        self.sheets
            .get_mut(sheet)
            .ok_or_else(|| AppError::SheetNotFound(sheet.to_string()))
    }
}

fn put(rows: &mut Vec<Vec<CellValue>>, row: usize, col: usize, value: CellValue) {
    if rows.len() <= row {
        rows.resize_with(row + 1, Vec::new);
    }
    let cells = &mut rows[row];
    if cells.len() <= col {
        cells.resize(col + 1, CellValue::Empty);
    }
    cells[col] = value;
}

impl TableStore for MemoryStore {
    fn ensure_sheet(&mut self, sheet: &str) -> AppResult<bool> {
        if self.sheets.contains_key(sheet) {
            return Ok(false);
        }
        self.sheets.insert(sheet.to_string(), MemorySheet::default());
        Ok(true)
    }

    fn has_sheet(&self, sheet: &str) -> AppResult<bool> {
        Ok(self.sheets.contains_key(sheet))
    }

    fn read_all(&self, sheet: &str) -> AppResult<Vec<Vec<CellValue>>> {
        let s = self
            .sheets
            .get(sheet)
            .ok_or_else(|| AppError::SheetNotFound(sheet.to_string()))?;

        // ultima riga non vuota
        let height = s
            .rows
            .iter()
            .rposition(|r| !r.iter().all(|c| *c == CellValue::Empty))
            .map(|i| i + 1)
            .unwrap_or(0);

        let width = s.rows[..height].iter().map(Vec::len).max().unwrap_or(0);

        Ok(s.rows[..height]
            .iter()
            .map(|r| {
                let mut padded = r.clone();
                padded.resize(width, CellValue::Empty);
                padded
            })
            .collect())
    }

    fn write_cell(
        &mut self,
        sheet: &str,
        row: usize,
        col: usize,
        value: CellValue,
    ) -> AppResult<()> {
        let s = self.sheet_mut(sheet)?;
        put(&mut s.rows, row, col, value);
        Ok(())
    }

    fn write_column(
        &mut self,
        sheet: &str,
        col: usize,
        start_row: usize,
        values: &[CellValue],
    ) -> AppResult<()> {
        let s = self.sheet_mut(sheet)?;
        for (offset, value) in values.iter().enumerate() {
            put(&mut s.rows, start_row + offset, col, value.clone());
        }
        Ok(())
    }

    fn write_header(&mut self, sheet: &str, columns: &[&str]) -> AppResult<()> {
        let s = self.sheet_mut(sheet)?;
        let header: Vec<CellValue> = columns.iter().map(|c| CellValue::text(*c)).collect();

        if s.rows.is_empty() {
            s.rows.push(header);
        } else {
            s.rows[0] = header;
        }
        s.bold_header = true;
        Ok(())
    }

    fn append_row(&mut self, sheet: &str, values: &[CellValue]) -> AppResult<()> {
        let next = self.read_all(sheet)?.len();
        let s = self.sheet_mut(sheet)?;
        s.rows.truncate(next);
        s.rows.push(values.to_vec());
        Ok(())
    }
}

impl TriggerRegistry for MemoryStore {
    fn triggers(&self) -> AppResult<Vec<Trigger>> {
        Ok(self.triggers.clone())
    }

    fn register(&mut self, trigger: &Trigger) -> AppResult<()> {
        self.triggers.push(trigger.clone());
        Ok(())
    }

    fn mark_fired(&mut self, handler: &str, at: NaiveDateTime) -> AppResult<()> {
        let mut found = false;
        for t in self.triggers.iter_mut().filter(|t| t.handler == handler) {
            t.last_fired = Some(at);
            found = true;
        }

        if found {
            Ok(())
        } else {
            Err(AppError::Trigger(format!("No trigger registered for '{handler}'")))
        }
    }
}
