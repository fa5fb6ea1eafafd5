//! Header bootstrap and column lookup.

use super::{CellValue, TableStore};
use crate::errors::{AppError, AppResult};

/// Create `sheet` if needed and force its header row to exactly `columns`.
///
/// Returns `true` when anything was written. Running it twice is a no-op the
/// second time.
pub fn ensure_schema<S: TableStore + ?Sized>(
    store: &mut S,
    sheet: &str,
    columns: &[&str],
) -> AppResult<bool> {
    let created = store.ensure_sheet(sheet)?;
    let rows = store.read_all(sheet)?;

    let matches = rows
        .first()
        .map(|header| header_matches(header, columns))
        .unwrap_or(false);

    if matches {
        return Ok(created);
    }

    store.write_header(sheet, columns)?;
    Ok(true)
}

/// Lazy bootstrap: create `sheet` and write its header only when the sheet is
/// missing or its header row is blank. An existing, different header is left
/// untouched so that column lookups can report what is missing.
pub fn ensure_sheet_with_header<S: TableStore + ?Sized>(
    store: &mut S,
    sheet: &str,
    columns: &[&str],
) -> AppResult<()> {
    store.ensure_sheet(sheet)?;
    let rows = store.read_all(sheet)?;

    let blank = rows
        .first()
        .map(|header| header.iter().all(CellValue::is_blank))
        .unwrap_or(true);

    if blank {
        store.write_header(sheet, columns)?;
    }
    Ok(())
}

fn header_matches(header: &[CellValue], columns: &[&str]) -> bool {
    // celle oltre l'ultima colonna attesa devono essere vuote
    let extra_blank = header.iter().skip(columns.len()).all(CellValue::is_blank);

    extra_blank
        && columns.iter().enumerate().all(|(i, expected)| {
            header
                .get(i)
                .map(|cell| cell.as_display() == *expected)
                .unwrap_or(false)
        })
}

/// Zero-based column indices resolved from a header row, by name.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    names: Vec<String>,
    indices: Vec<usize>,
}

impl ColumnMap {
    /// Resolve each of `required` against `header` (trimmed, exact match).
    /// Fails with `AppError::Schema` on the first missing column.
    pub fn resolve(sheet: &str, header: &[CellValue], required: &[&str]) -> AppResult<Self> {
        let mut indices = Vec::with_capacity(required.len());

        for name in required {
            let idx = header
                .iter()
                .position(|cell| cell.as_display().trim() == *name)
                .ok_or_else(|| AppError::schema(sheet, name))?;
            indices.push(idx);
        }

        Ok(Self {
            names: required.iter().map(|s| s.to_string()).collect(),
            indices,
        })
    }

    /// Index of a column that was part of `required`.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.indices[i])
    }

    /// Cell of `row` under column `name`, `Empty` when the row is short.
    pub fn cell<'r>(&self, row: &'r [CellValue], name: &str) -> &'r CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.index(name).and_then(|i| row.get(i)).unwrap_or(&EMPTY)
    }

    /// Width of the row needed to hold every resolved column.
    pub fn width(&self) -> usize {
        self.indices.iter().max().map(|m| m + 1).unwrap_or(0)
    }
}
