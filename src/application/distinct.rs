// ============================================================
// DISTINCT-VALUE EXTRACTOR
// ============================================================
// Per-column listing of non-missing unique values

use crate::domain::{ColumnDistinct, DistinctReport, Table};
use std::collections::HashSet;

/// Build the distinct-value report for one table.
///
/// Missing values (empty after trim) are dropped; the survivors are
/// deduplicated in first-seen order. Pure function, recomputed on every
/// request.
pub fn extract_distinct(table: &Table) -> DistinctReport {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let mut seen = HashSet::new();
            let mut values = Vec::new();

            for value in table.column_values(index) {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                if seen.insert(value.to_string()) {
                    values.push(value.to_string());
                }
            }

            ColumnDistinct {
                column: header.clone(),
                values,
            }
        })
        .collect();

    DistinctReport {
        table: table.label.clone(),
        row_count: table.row_count(),
        column_count: table.column_count(),
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            "Main".to_string(),
            vec!["id".to_string(), "color".to_string()],
            vec![
                vec!["1".to_string(), "red".to_string()],
                vec!["2".to_string(), "".to_string()],
                vec!["1".to_string(), "blue".to_string()],
                vec!["3".to_string(), "red".to_string()],
            ],
        )
    }

    #[test]
    fn test_one_entry_per_column() {
        let report = extract_distinct(&sample_table());
        assert_eq!(report.columns.len(), report.column_count);
        assert_eq!(report.columns.len(), 2);
    }

    #[test]
    fn test_no_duplicates_no_empties() {
        let report = extract_distinct(&sample_table());

        for column in &report.columns {
            let unique: std::collections::HashSet<_> = column.values.iter().collect();
            assert_eq!(unique.len(), column.values.len());
            assert!(column.values.iter().all(|v| !v.is_empty()));
        }

        assert_eq!(report.values_for("id").unwrap(), ["1", "2", "3"]);
        assert_eq!(report.values_for("color").unwrap(), ["red", "blue"]);
    }

    #[test]
    fn test_counts_reflect_table_shape() {
        let report = extract_distinct(&sample_table());
        assert_eq!(report.row_count, 4);
        assert_eq!(report.column_count, 2);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new("Main".to_string(), vec!["a".to_string()], Vec::new());
        let report = extract_distinct(&table);
        assert_eq!(report.columns.len(), 1);
        assert!(report.columns[0].values.is_empty());
    }
}
