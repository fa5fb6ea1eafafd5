// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{excel_num_format, naive_datetime_to_excel_serial};
use crate::export::{SheetExport, notify_export_success};
use crate::sheet::CellValue;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con header in grassetto, righe a bande e auto-larghezza colonne.
pub(crate) fn export_xlsx(data: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&data.name).map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in data.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = data
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let empty = CellValue::Empty;
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, cells) in data.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for col in 0..data.headers.len() {
            let cell = cells.get(col).unwrap_or(&empty);
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;

            let shown = cell.as_display();
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(shown.as_str()));
        }
    }

    // ---------------------------
    // Set column widths (max 60)
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(60) as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Scrive una singola cella rispettando il tipo del valore.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        CellValue::Empty => worksheet.write_blank(row, col, &base),
        CellValue::Bool(b) => worksheet.write_boolean_with_format(row, col, *b, &base),
        CellValue::Number(n) => worksheet.write_number_with_format(
            row,
            col,
            *n,
            &base.set_align(FormatAlign::Right),
        ),
        CellValue::Text(s) => worksheet.write_string_with_format(row, col, s, &base),
        CellValue::Date(dt) => worksheet.write_number_with_format(
            row,
            col,
            naive_datetime_to_excel_serial(dt),
            &base.set_num_format(excel_num_format(dt)),
        ),
    }
    .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
