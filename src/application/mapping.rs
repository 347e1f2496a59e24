// ============================================================
// COLUMN MATCHER
// ============================================================
// Greedy value-overlap matching between main and supplementary columns

use crate::domain::{DistinctReport, MappingReport, MappingRow};
use std::collections::HashSet;

/// Infer column correspondences from distinct-value overlap.
///
/// For each main column, supplementary tables are scanned in upload order
/// and, within each, columns in header order; the first column whose
/// distinct-value set intersects the main column's wins. No overlap-size
/// ranking and no collision detection: the heuristic is deliberately
/// greedy and order-dependent, and a miss is a normal outcome (`None`).
pub fn build_mapping(main: &DistinctReport, supplementary: &[DistinctReport]) -> MappingReport {
    let rows = main
        .columns
        .iter()
        .map(|main_column| {
            let main_values: HashSet<&str> =
                main_column.values.iter().map(|v| v.as_str()).collect();

            let matches = supplementary
                .iter()
                .map(|supp| first_overlapping_column(&main_values, supp))
                .collect();

            MappingRow {
                main_column: main_column.column.clone(),
                matches,
            }
        })
        .collect();

    MappingReport {
        supplementary: supplementary.iter().map(|s| s.table.clone()).collect(),
        rows,
    }
}

fn first_overlapping_column(
    main_values: &HashSet<&str>,
    supp: &DistinctReport,
) -> Option<String> {
    supp.columns
        .iter()
        .find(|column| column.values.iter().any(|v| main_values.contains(v.as_str())))
        .map(|column| column.column.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColumnDistinct;

    fn report(table: &str, columns: &[(&str, &[&str])]) -> DistinctReport {
        DistinctReport {
            table: table.to_string(),
            row_count: 0,
            column_count: columns.len(),
            columns: columns
                .iter()
                .map(|(name, values)| ColumnDistinct {
                    column: name.to_string(),
                    values: values.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_overlap_matches() {
        let main = report("Main", &[("id", &["1", "2", "3"])]);
        let supp = report("Supplementary 1", &[("uid", &["2", "3", "4"])]);

        let mapping = build_mapping(&main, &[supp]);

        assert_eq!(mapping.rows.len(), 1);
        assert_eq!(mapping.rows[0].main_column, "id");
        assert_eq!(mapping.rows[0].matches, vec![Some("uid".to_string())]);
    }

    #[test]
    fn test_disjoint_sets_yield_no_match() {
        let main = report("Main", &[("name", &["a", "b"])]);
        let supp = report("Supplementary 1", &[("label", &["x", "y"])]);

        let mapping = build_mapping(&main, &[supp]);

        assert_eq!(mapping.rows[0].matches, vec![None]);
    }

    #[test]
    fn test_first_match_wins() {
        // both supplementary columns overlap; header order decides
        let main = report("Main", &[("id", &["1", "2"])]);
        let supp = report(
            "Supplementary 1",
            &[("code", &["2", "9"]), ("uid", &["1", "2"])],
        );

        let mapping = build_mapping(&main, &[supp]);

        assert_eq!(mapping.rows[0].matches, vec![Some("code".to_string())]);
    }

    #[test]
    fn test_one_entry_per_supplementary_table() {
        let main = report("Main", &[("id", &["1"]), ("name", &["a"])]);
        let supp1 = report("Supplementary 1", &[("uid", &["1"])]);
        let supp2 = report("Supplementary 2", &[("tag", &["z"])]);

        let mapping = build_mapping(&main, &[supp1, supp2]);

        assert_eq!(mapping.supplementary.len(), 2);
        for row in &mapping.rows {
            assert_eq!(row.matches.len(), 2);
        }
        assert_eq!(mapping.rows[0].matches, vec![Some("uid".to_string()), None]);
        assert_eq!(mapping.rows[1].matches, vec![None, None]);
    }

    #[test]
    fn test_deterministic_on_identical_inputs() {
        let main = report("Main", &[("id", &["1", "2"]), ("city", &["NYC"])]);
        let supps = vec![
            report("Supplementary 1", &[("uid", &["2"]), ("place", &["NYC"])]),
            report("Supplementary 2", &[("n", &["7"])]),
        ];

        let first = build_mapping(&main, &supps);
        let second = build_mapping(&main, &supps);

        assert_eq!(first.rows, second.rows);
    }
}
