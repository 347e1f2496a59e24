// ============================================================
// REPORT TYPES
// ============================================================
// Wire-level results derived from loaded tables

use serde::{Deserialize, Serialize};

/// Distinct values of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDistinct {
    /// Column name as it appears in the header row
    pub column: String,

    /// Non-missing unique values, first-seen order
    pub values: Vec<String>,
}

/// Distinct-value listing for one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctReport {
    /// Table label, `Main` or `Supplementary N`
    pub table: String,

    pub row_count: usize,
    pub column_count: usize,

    /// One entry per column, header order
    pub columns: Vec<ColumnDistinct>,
}

impl DistinctReport {
    /// Look up a column's distinct values by name.
    pub fn values_for(&self, column: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.values.as_slice())
    }
}

/// One row of the mapping table: a main column and, per supplementary
/// table, the matched column name or `None` for "no match".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRow {
    pub main_column: String,

    /// Aligned with `MappingReport::supplementary`
    pub matches: Vec<Option<String>>,
}

/// Inferred column correspondences between the main table and every
/// supplementary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingReport {
    /// Supplementary table labels, upload order
    pub supplementary: Vec<String>,

    /// One row per main-table column, header order
    pub rows: Vec<MappingRow>,
}

/// Everything one ingestion round produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// Distinct-value reports, main first, then supplementaries in
    /// upload order
    pub tables: Vec<DistinctReport>,

    /// Present only when a main table was loaded
    pub mapping: Option<MappingReport>,

    /// User-facing notices (currently only the eleven-file truncation)
    pub warnings: Vec<String>,
}
