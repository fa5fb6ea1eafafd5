//! Tabular storage port: named sheets of cells addressed by zero-based
//! row/column coordinates. Row 0 is always the header row.

pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod value;

pub use memory::MemoryStore;
pub use schema::{ColumnMap, ensure_schema, ensure_sheet_with_header};
pub use value::CellValue;

use crate::errors::AppResult;

/// Read/write access to a set of named sheets.
///
/// `read_all` returns a rectangular grid: every row has the same number of
/// cells, padded with `CellValue::Empty`. A sheet with no cells yields an
/// empty grid.
pub trait TableStore {
    /// Get-or-create. Returns `true` when the sheet did not exist before.
    fn ensure_sheet(&mut self, sheet: &str) -> AppResult<bool>;

    fn has_sheet(&self, sheet: &str) -> AppResult<bool>;

    fn read_all(&self, sheet: &str) -> AppResult<Vec<Vec<CellValue>>>;

    fn write_cell(&mut self, sheet: &str, row: usize, col: usize, value: CellValue)
    -> AppResult<()>;

    /// Overwrite `values.len()` consecutive cells of `col`, starting at `start_row`.
    fn write_column(
        &mut self,
        sheet: &str,
        col: usize,
        start_row: usize,
        values: &[CellValue],
    ) -> AppResult<()>;

    /// Replace row 0 with exactly `columns`, styled bold.
    fn write_header(&mut self, sheet: &str, columns: &[&str]) -> AppResult<()>;

    /// Append a row after the last non-empty row.
    fn append_row(&mut self, sheet: &str, values: &[CellValue]) -> AppResult<()>;
}
