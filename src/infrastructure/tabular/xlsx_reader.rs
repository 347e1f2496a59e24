// ============================================================
// XLSX READER
// ============================================================
// Read the first worksheet of an uploaded .xlsx file into a Table

use crate::domain::error::{AppError, Result};
use crate::domain::Table;
use calamine::{DataType, Reader, Xlsx};
use std::io::Cursor;

/// Parse uploaded xlsx bytes into a table.
///
/// Only the first worksheet is read; its first row becomes the header and
/// every cell is stringified so downstream code sees the same shape as a
/// parsed CSV.
pub fn read_xlsx(label: &str, bytes: &[u8]) -> Result<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
        .map_err(|e| AppError::ParseError(format!("Failed to read Excel range: {}", e)))?;

    let mut rows = range.rows().map(|row| {
        row.iter()
            .map(|cell| {
                cell.as_string()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("{}", cell))
            })
            .map(|value| value.trim().to_string())
            .collect::<Vec<String>>()
    });

    let headers = rows.next().unwrap_or_default();
    let body: Vec<Vec<String>> = rows
        .filter(|row| !row.iter().all(|cell| cell.is_empty()))
        .collect();

    Ok(Table::new(label.to_string(), headers, body))
}
