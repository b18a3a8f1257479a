//! CSV decoding and column-name normalization.
//!
//! Produces the [`RawTable`] input contract: headers are trimmed,
//! lowercased, and space-separated words joined with underscores, so the
//! engine can rely on normalized names. Rows that cannot be read or carry a
//! mismatched field count are skipped, matching the lenient line handling
//! of the upstream exports this tool ingests.

use quizlens_core::record::RawTable;

use crate::error::SourceError;

/// Normalize a header: trim, lowercase, spaces to underscores.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Decode CSV bytes into a column-normalized [`RawTable`].
pub fn decode_csv(bytes: &[u8]) -> Result<RawTable, SourceError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| SourceError::Csv(e.to_string()))?;
    let columns: Vec<String> = headers.iter().map(normalize_column).collect();
    let mut table = RawTable::new(columns);

    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(row = row_no, error = %e, "skipping unreadable CSV row");
                continue;
            }
        };
        if record.len() != table.columns.len() {
            tracing::warn!(
                row = row_no,
                fields = record.len(),
                expected = table.columns.len(),
                "skipping row with mismatched field count"
            );
            continue;
        }
        table
            .rows
            .push(record.iter().map(|cell| cell.to_string()).collect());
    }

    tracing::debug!(
        columns = table.columns.len(),
        rows = table.rows.len(),
        "CSV decoded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_column("  User ID "), "user_id");
        assert_eq!(normalize_column("Total Score"), "total_score");
        assert_eq!(normalize_column("attempts"), "attempts");
    }

    #[test]
    fn decodes_rows_with_normalized_columns() {
        let csv = "User ID,Question No,Is Correct\nu1,1,true\nu2,2,false\n";
        let table = decode_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["user_id", "question_no", "is_correct"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["u2", "2", "false"]);
    }

    #[test]
    fn skips_rows_with_mismatched_field_count() {
        let csv = "a,b\n1,2\n1,2,3\n4,5\n";
        let table = decode_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["4", "5"]);
    }

    #[test]
    fn empty_body_yields_empty_table() {
        let table = decode_csv(b"").unwrap();
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }
}
