// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SheetExport;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, SheetKind};
use crate::games::GAMES_COLUMNS;
use crate::leaderboard::LEADERBOARD_COLUMNS;
use crate::sheet::{TableStore, ensure_sheet_with_header};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export of one sheet, raw cell values included.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    pub fn export<S: TableStore + ?Sized>(
        store: &mut S,
        sheet: SheetKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let data = Self::snapshot(store, sheet)?;

        if data.rows.is_empty() {
            warning(format!("Sheet '{}' has no data rows.", data.name));
        }

        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
            ExportFormat::Xlsx => export_xlsx(&data, path)?,
        }

        Ok(data.rows.len())
    }

    /// Read a sheet, creating it with its header first when missing.
    pub fn snapshot<S: TableStore + ?Sized>(
        store: &mut S,
        sheet: SheetKind,
    ) -> AppResult<SheetExport> {
        let columns: &[&str] = match sheet {
            SheetKind::Games => &GAMES_COLUMNS,
            SheetKind::Leaderboard => &LEADERBOARD_COLUMNS,
        };
        let name = sheet.sheet_name();

        ensure_sheet_with_header(&mut *store, name, columns)?;
        let grid = store.read_all(name)?;
        Ok(SheetExport::from_grid(name, grid))
    }
}
