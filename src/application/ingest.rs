// ============================================================
// INGEST USE CASE
// ============================================================
// One-shot batch: cap uploads, load tables, extract distincts, match

use crate::application::distinct::extract_distinct;
use crate::application::mapping::build_mapping;
use crate::domain::error::Result;
use crate::domain::{DistinctReport, IngestReport};
use crate::infrastructure::tabular::load_table;
use tracing::info;

/// Warning shown when supplementary uploads exceed the configured cap.
pub fn supplementary_limit_warning(max_supplementary: usize) -> String {
    format!(
        "You can only upload up to {} supplementary tables.",
        max_supplementary
    )
}

/// One uploaded file body with its declared name.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Run one ingestion round.
///
/// Supplementary files beyond `max_supplementary` are dropped and the
/// truncation warning is surfaced to the user. Files with unsupported
/// extensions are skipped silently. The mapping step only runs when the
/// main file loaded into a table.
pub fn ingest(
    main: Option<UploadedFile>,
    mut supplementary: Vec<UploadedFile>,
    max_supplementary: usize,
) -> Result<IngestReport> {
    let mut warnings = Vec::new();

    if supplementary.len() > max_supplementary {
        warnings.push(supplementary_limit_warning(max_supplementary));
        supplementary.truncate(max_supplementary);
    }

    let main_table = match main {
        Some(file) => load_table("Main", &file.file_name, &file.bytes)?,
        None => None,
    };

    let mut supp_tables = Vec::new();
    for (index, file) in supplementary.iter().enumerate() {
        let label = format!("Supplementary {}", index + 1);
        if let Some(table) = load_table(&label, &file.file_name, &file.bytes)? {
            supp_tables.push(table);
        }
    }

    let main_distinct = main_table.as_ref().map(extract_distinct);
    let supp_distinct: Vec<DistinctReport> = supp_tables.iter().map(extract_distinct).collect();

    let mapping = main_distinct
        .as_ref()
        .map(|main| build_mapping(main, &supp_distinct));

    let mut tables = Vec::new();
    if let Some(report) = main_distinct {
        tables.push(report);
    }
    tables.extend(supp_distinct);

    info!(
        tables = tables.len(),
        mapped = mapping.is_some(),
        "Ingestion round complete"
    );

    Ok(IngestReport {
        tables,
        mapping,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(name: &str, content: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            bytes: content.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_main_and_one_supplementary() {
        let report = ingest(
            Some(csv("main.csv", "id,name\n1,a\n2,b\n3,c")),
            vec![csv("supp.csv", "uid,score\n2,10\n3,20\n4,30")],
            11,
        )
        .unwrap();

        assert_eq!(report.tables.len(), 2);
        assert_eq!(report.tables[0].table, "Main");
        assert_eq!(report.tables[1].table, "Supplementary 1");

        let mapping = report.mapping.unwrap();
        assert_eq!(mapping.rows[0].main_column, "id");
        assert_eq!(mapping.rows[0].matches, vec![Some("uid".to_string())]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_no_main_skips_mapping() {
        let report = ingest(None, vec![csv("supp.csv", "a\n1")], 11).unwrap();

        assert_eq!(report.tables.len(), 1);
        assert!(report.mapping.is_none());
    }

    #[test]
    fn test_thirteen_supplementaries_truncated_with_warning() {
        let supps: Vec<UploadedFile> = (0..13)
            .map(|i| csv(&format!("s{}.csv", i), "a\n1"))
            .collect();

        let report = ingest(Some(csv("main.csv", "id\n1")), supps, 11).unwrap();

        // main + eleven supplementaries
        assert_eq!(report.tables.len(), 12);
        assert_eq!(
            report.warnings,
            vec!["You can only upload up to 11 supplementary tables.".to_string()]
        );
        assert_eq!(report.mapping.unwrap().supplementary.len(), 11);
    }

    #[test]
    fn test_warning_reflects_configured_cap() {
        let supps: Vec<UploadedFile> = (0..3)
            .map(|i| csv(&format!("s{}.csv", i), "a\n1"))
            .collect();

        let report = ingest(None, supps, 2).unwrap();

        assert_eq!(report.tables.len(), 2);
        assert_eq!(
            report.warnings,
            vec!["You can only upload up to 2 supplementary tables.".to_string()]
        );
    }

    #[test]
    fn test_unsupported_main_extension_skips_mapping() {
        let report = ingest(
            Some(csv("main.txt", "id\n1")),
            vec![csv("supp.csv", "uid\n1")],
            11,
        )
        .unwrap();

        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].table, "Supplementary 1");
        assert!(report.mapping.is_none());
    }

    #[test]
    fn test_supplementary_labels_follow_upload_order() {
        let report = ingest(
            Some(csv("main.csv", "id\n1")),
            vec![
                csv("first.csv", "uid\n1"),
                csv("skipped.json", "{}"),
                csv("second.csv", "code\n9"),
            ],
            11,
        )
        .unwrap();

        // the unsupported file is dropped silently but numbering follows
        // upload position among loaded tables
        let labels: Vec<&str> = report.tables.iter().map(|t| t.table.as_str()).collect();
        assert_eq!(labels, vec!["Main", "Supplementary 1", "Supplementary 3"]);
    }
}
