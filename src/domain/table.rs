// ============================================================
// TABLE TYPES
// ============================================================
// In-memory representation of one uploaded tabular file

use serde::{Deserialize, Serialize};

/// Supported upload formats, sniffed from the declared file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Xlsx,
}

impl TableFormat {
    /// Sniff the format from the file name extension.
    ///
    /// Anything other than `.csv` or `.xlsx` yields `None`; unsupported
    /// uploads are skipped silently rather than rejected.
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".csv") {
            Some(TableFormat::Csv)
        } else if name.ends_with(".xlsx") {
            Some(TableFormat::Xlsx)
        } else {
            None
        }
    }
}

/// One loaded table: named columns over rows of string cells.
///
/// Never mutated after load. Every cell is a string; spreadsheet cells are
/// stringified on read so csv and xlsx inputs behave identically downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Display label, `Main` or `Supplementary N`
    pub label: String,

    /// Column names in original order
    pub headers: Vec<String>,

    /// Row-major cells, each row padded to the header width
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table, padding ragged rows with empty cells.
    pub fn new(label: String, headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            if row.len() < width {
                row.resize(width, String::new());
            } else if row.len() > width {
                row.truncate(width);
            }
        }

        Self { label, headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[index].as_str())
    }
}
