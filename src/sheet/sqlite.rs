//! `TableStore` backed by the `sheets` / `cells` tables.
//!
//! Each non-empty cell is one row in `cells`, tagged with the kind of value it
//! holds. Empty cells are simply absent.

use super::value::DATETIME_FORMAT;
use super::{CellValue, TableStore};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, params};

fn encode(value: &CellValue) -> Option<(&'static str, String)> {
    match value {
        CellValue::Empty => None,
        CellValue::Bool(b) => Some(("bool", b.to_string())),
        CellValue::Number(n) => Some(("number", n.to_string())),
        CellValue::Text(s) => Some(("text", s.clone())),
        CellValue::Date(dt) => Some(("date", dt.format(DATETIME_FORMAT).to_string())),
    }
}

fn decode(kind: &str, raw: String) -> CellValue {
    match kind {
        "bool" => CellValue::Bool(raw == "true"),
        "number" => raw
            .parse::<f64>()
            .map(CellValue::Number)
            .unwrap_or(CellValue::Text(raw)),
        "date" => NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT)
            .map(CellValue::Date)
            .unwrap_or(CellValue::Text(raw)),
        _ => CellValue::Text(raw),
    }
}

fn sheet_exists(conn: &Connection, sheet: &str) -> rusqlite::Result<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM sheets WHERE name = ?1", [sheet], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}

fn require_sheet(conn: &Connection, sheet: &str) -> AppResult<()> {
    if sheet_exists(conn, sheet)? {
        Ok(())
    } else {
        Err(AppError::SheetNotFound(sheet.to_string()))
    }
}

fn put_cell(
    conn: &Connection,
    sheet: &str,
    row: usize,
    col: usize,
    value: &CellValue,
    bold: bool,
) -> rusqlite::Result<()> {
    match encode(value) {
        None => {
            conn.execute(
                "DELETE FROM cells WHERE sheet = ?1 AND row = ?2 AND col = ?3",
                params![sheet, row as i64, col as i64],
            )?;
        }
        Some((kind, raw)) => {
            conn.execute(
                "INSERT INTO cells (sheet, row, col, kind, value, bold)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(sheet, row, col)
                 DO UPDATE SET kind = excluded.kind, value = excluded.value, bold = excluded.bold",
                params![sheet, row as i64, col as i64, kind, raw, bold as i32],
            )?;
        }
    }
    Ok(())
}

fn last_row(conn: &Connection, sheet: &str) -> rusqlite::Result<Option<usize>> {
    let max: Option<i64> = conn.query_row(
        "SELECT MAX(row) FROM cells WHERE sheet = ?1",
        [sheet],
        |row| row.get(0),
    )?;
    Ok(max.map(|m| m as usize))
}

impl DbPool {
    /// Whether the cell at (`row`, `col`) carries the bold style.
    pub fn is_bold(&self, sheet: &str, row: usize, col: usize) -> AppResult<bool> {
        let bold: Option<i32> = self
            .conn
            .query_row(
                "SELECT bold FROM cells WHERE sheet = ?1 AND row = ?2 AND col = ?3",
                params![sheet, row as i64, col as i64],
                |r| r.get(0),
            )
            .optional()?;
        Ok(bold == Some(1))
    }

    /// Names of every sheet, in creation order.
    pub fn sheet_names(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sheets ORDER BY created_at ASC, name ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl TableStore for DbPool {
    fn ensure_sheet(&mut self, sheet: &str) -> AppResult<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO sheets (name, created_at) VALUES (?1, ?2)",
            params![sheet, Local::now().to_rfc3339()],
        )?;
        Ok(inserted > 0)
    }

    fn has_sheet(&self, sheet: &str) -> AppResult<bool> {
        Ok(sheet_exists(&self.conn, sheet)?)
    }

    fn read_all(&self, sheet: &str) -> AppResult<Vec<Vec<CellValue>>> {
        require_sheet(&self.conn, sheet)?;

        let mut stmt = self.conn.prepare(
            "SELECT row, col, kind, value FROM cells
             WHERE sheet = ?1
             ORDER BY row ASC, col ASC",
        )?;

        let cells = stmt.query_map([sheet], |row| {
            Ok((
                row.get::<_, i64>(0)? as usize,
                row.get::<_, i64>(1)? as usize,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut loaded = Vec::new();
        for c in cells {
            loaded.push(c?);
        }

        let height = loaded.iter().map(|(r, ..)| r + 1).max().unwrap_or(0);
        let width = loaded.iter().map(|(_, c, ..)| c + 1).max().unwrap_or(0);

        let mut grid = vec![vec![CellValue::Empty; width]; height];
        for (r, c, kind, raw) in loaded {
            grid[r][c] = decode(&kind, raw);
        }

        Ok(grid)
    }

    fn write_cell(
        &mut self,
        sheet: &str,
        row: usize,
        col: usize,
        value: CellValue,
    ) -> AppResult<()> {
        require_sheet(&self.conn, sheet)?;
        put_cell(&self.conn, sheet, row, col, &value, false)?;
        Ok(())
    }

    fn write_column(
        &mut self,
        sheet: &str,
        col: usize,
        start_row: usize,
        values: &[CellValue],
    ) -> AppResult<()> {
        require_sheet(&self.conn, sheet)?;

        // un'unica transazione per tutta la colonna
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            for (offset, value) in values.iter().enumerate() {
                put_cell(&tx, sheet, start_row + offset, col, value, false)?;
            }
            tx.commit()
        })?;
        Ok(())
    }

    fn write_header(&mut self, sheet: &str, columns: &[&str]) -> AppResult<()> {
        require_sheet(&self.conn, sheet)?;

        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM cells WHERE sheet = ?1 AND row = 0",
                params![sheet],
            )?;
            for (col, name) in columns.iter().enumerate() {
                put_cell(&tx, sheet, 0, col, &CellValue::text(*name), true)?;
            }
            tx.commit()
        })?;
        Ok(())
    }

    fn append_row(&mut self, sheet: &str, values: &[CellValue]) -> AppResult<()> {
        require_sheet(&self.conn, sheet)?;

        let row = last_row(&self.conn, sheet)?.map(|r| r + 1).unwrap_or(0);

        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            for (col, value) in values.iter().enumerate() {
                put_cell(&tx, sheet, row, col, value, false)?;
            }
            tx.commit()
        })?;
        Ok(())
    }
}
