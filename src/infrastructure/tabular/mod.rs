// ============================================================
// TABULAR INFRASTRUCTURE LAYER
// ============================================================
// Format sniffing and per-format readers for uploaded files

mod csv_reader;
mod xlsx_reader;

pub use csv_reader::CsvReader;
pub use xlsx_reader::read_xlsx;

use crate::domain::error::Result;
use crate::domain::{Table, TableFormat};

/// Load one uploaded file into a table.
///
/// Unsupported extensions yield `Ok(None)`: the file is skipped, not
/// rejected. Malformed bytes in a supported format are an error.
pub fn load_table(label: &str, file_name: &str, bytes: &[u8]) -> Result<Option<Table>> {
    match TableFormat::from_file_name(file_name) {
        Some(TableFormat::Csv) => CsvReader::read_auto_detect(label, bytes).map(Some),
        Some(TableFormat::Xlsx) => read_xlsx(label, bytes).map(Some),
        None => Ok(None),
    }
}
