// src/export/model.rs

use crate::sheet::CellValue;

/// A sheet snapshot: header names plus the data rows below them.
#[derive(Debug, Clone)]
pub struct SheetExport {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetExport {
    /// Split a raw grid into header + data rows, dropping blank rows.
    pub fn from_grid(name: &str, grid: Vec<Vec<CellValue>>) -> Self {
        let mut iter = grid.into_iter();
        let headers = iter
            .next()
            .map(|h| h.iter().map(CellValue::as_display).collect())
            .unwrap_or_default();

        let rows = iter
            .filter(|r| !r.iter().all(CellValue::is_blank))
            .collect();

        Self {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    /// Data rows rendered as plain strings (CSV).
    pub(crate) fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                (0..self.headers.len())
                    .map(|i| r.get(i).map(CellValue::as_display).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
