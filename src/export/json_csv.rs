// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{SheetExport, notify_export_success};
use crate::sheet::CellValue;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Date(_) => Value::String(cell.as_display()),
    }
}

/// Export JSON pretty-printed: one object per row, keyed by header.
pub(crate) fn export_json(data: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let objects: Vec<Value> = data
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (i, header) in data.headers.iter().enumerate() {
                let value = row.get(i).map(cell_to_json).unwrap_or(Value::Null);
                obj.insert(header.clone(), value);
            }
            Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&objects)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row first.
pub(crate) fn export_csv(data: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&data.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in data.string_rows() {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
