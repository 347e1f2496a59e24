// ============================================================
// DOMAIN LAYER
// ============================================================
// Core types for tables and derived reports
// No I/O, no async

pub mod error;
mod report;
mod table;

pub use report::{ColumnDistinct, DistinctReport, IngestReport, MappingReport, MappingRow};
pub use table::{Table, TableFormat};
