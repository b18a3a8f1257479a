//! Schema validation and row typing.
//!
//! The column check is exhaustive: every missing name is collected before
//! failing, so a caller sees the complete deficiency in one pass. Row typing
//! then converts string cells into [`QuizResponseRecord`]s, dropping rows
//! that cannot be typed and emitting a [`DataQualityWarning`] per defect.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::record::{QuizResponseRecord, RawTable, RecordSet, REQUIRED_COLUMNS};

/// A non-fatal data-quality finding.
///
/// Warnings never block report generation; the defective row is excluded
/// from the affected aggregates only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataQualityWarning {
    /// Zero-based row index in the source table, when row-specific.
    pub row: Option<usize>,
    /// Human-readable description of the defect.
    pub message: String,
}

/// Check that every required column is present in the table.
pub fn check_required_columns(table: &RawTable) -> Result<(), AnalyticsError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AnalyticsError::Schema { missing })
    }
}

/// Resolved cell positions for the required columns.
struct ColumnIndexes {
    user_id: usize,
    question_no: usize,
    quiz_question_id: usize,
    selected_option: usize,
    is_correct: usize,
    attempts: usize,
    score: usize,
    total_score: usize,
}

impl ColumnIndexes {
    fn resolve(table: &RawTable) -> Result<Self, AnalyticsError> {
        let mut missing = Vec::new();
        let mut col = |name: &str| {
            table.column_index(name).unwrap_or_else(|| {
                missing.push(name.to_string());
                usize::MAX
            })
        };

        let indexes = Self {
            total_score: col("total_score"),
            is_correct: col("is_correct"),
            user_id: col("user_id"),
            question_no: col("question_no"),
            score: col("score"),
            attempts: col("attempts"),
            selected_option: col("selected_option"),
            quiz_question_id: col("quiz_question_id"),
        };

        if missing.is_empty() {
            Ok(indexes)
        } else {
            Err(AnalyticsError::Schema { missing })
        }
    }
}

/// Validate the table and type its rows into a [`RecordSet`].
///
/// Rows whose cells cannot be typed (non-boolean `is_correct`, unparseable
/// numerics) are dropped with a warning. Defects that leave the row usable
/// (a non-positive `attempts` value, `total_score` outside the expected
/// 0-10 scoring range) keep the row and only warn; the affected aggregates
/// exclude such rows downstream.
pub fn build_record_set(
    table: &RawTable,
) -> Result<(RecordSet, Vec<DataQualityWarning>), AnalyticsError> {
    let indexes = ColumnIndexes::resolve(table)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut warnings = Vec::new();

    for (row_no, row) in table.rows.iter().enumerate() {
        match type_row(row, &indexes) {
            Ok(record) => {
                if record.attempts < 1 {
                    warnings.push(DataQualityWarning {
                        row: Some(row_no),
                        message: format!(
                            "attempts is {}, expected a positive integer",
                            record.attempts
                        ),
                    });
                }
                if !(0.0..=10.0).contains(&record.total_score) {
                    warnings.push(DataQualityWarning {
                        row: Some(row_no),
                        message: format!(
                            "total_score {} is outside the expected 0-10 range",
                            record.total_score
                        ),
                    });
                }
                records.push(record);
            }
            Err(message) => {
                tracing::warn!(row = row_no, %message, "dropping row");
                warnings.push(DataQualityWarning {
                    row: Some(row_no),
                    message,
                });
            }
        }
    }

    Ok((RecordSet::new(records), warnings))
}

fn type_row(row: &[String], indexes: &ColumnIndexes) -> Result<QuizResponseRecord, String> {
    let cell = |index: usize| row.get(index).map(String::as_str).unwrap_or("");

    let is_correct = parse_bool(cell(indexes.is_correct)).ok_or_else(|| {
        format!(
            "is_correct '{}' is not a strict boolean",
            cell(indexes.is_correct)
        )
    })?;
    let question_no = parse_int(cell(indexes.question_no)).ok_or_else(|| {
        format!("question_no '{}' is not an integer", cell(indexes.question_no))
    })?;
    let attempts = parse_int(cell(indexes.attempts))
        .ok_or_else(|| format!("attempts '{}' is not an integer", cell(indexes.attempts)))?;
    let score = parse_float(cell(indexes.score))
        .ok_or_else(|| format!("score '{}' is not numeric", cell(indexes.score)))?;
    let total_score = parse_float(cell(indexes.total_score)).ok_or_else(|| {
        format!("total_score '{}' is not numeric", cell(indexes.total_score))
    })?;

    Ok(QuizResponseRecord {
        user_id: cell(indexes.user_id).trim().to_string(),
        question_no,
        quiz_question_id: cell(indexes.quiz_question_id).trim().to_string(),
        selected_option: cell(indexes.selected_option).trim().to_string(),
        is_correct,
        attempts,
        score,
        total_score,
    })
}

/// Strict boolean parse: true/false in any case, or 1/0. Anything else is a
/// data-quality defect.
fn parse_bool(cell: &str) -> Option<bool> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_int(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    // CSV exports sometimes carry integral floats ("3.0")
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value.is_finite() => Some(value as i64),
        _ => None,
    }
}

fn parse_float(cell: &str) -> Option<f64> {
    cell.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> RawTable {
        let mut table = RawTable::new(
            [
                "user_id",
                "question_no",
                "quiz_question_id",
                "selected_option",
                "is_correct",
                "attempts",
                "score",
                "total_score",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        );
        table.rows.push(row(&["u1", "1", "q1", "A", "True", "1", "1", "7.5"]));
        table.rows.push(row(&["u2", "1", "q1", "B", "false", "2", "0", "4.0"]));
        table
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn missing_columns_reported_exhaustively() {
        let table = RawTable::new(vec!["user_id".into(), "score".into()]);
        let err = check_required_columns(&table).unwrap_err();
        let missing = err.missing_columns().unwrap();
        assert_eq!(missing.len(), 6);
        assert!(missing.contains(&"is_correct".to_string()));
        assert!(missing.contains(&"quiz_question_id".to_string()));
        assert!(!missing.contains(&"user_id".to_string()));
    }

    #[test]
    fn valid_table_types_every_row() {
        let (records, warnings) = build_record_set(&full_table()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(warnings.is_empty());
        assert!(records.records()[0].is_correct);
        assert_eq!(records.records()[1].attempts, 2);
        assert_eq!(records.records()[1].total_score, 4.0);
    }

    #[test]
    fn loose_boolean_is_dropped_with_warning() {
        let mut table = full_table();
        table.rows.push(row(&["u3", "2", "q2", "C", "yes", "1", "0", "3.0"]));
        let (records, warnings) = build_record_set(&table).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].row, Some(2));
        assert!(warnings[0].message.contains("strict boolean"));
    }

    #[test]
    fn negative_attempts_kept_but_warned() {
        let mut table = full_table();
        table.rows.push(row(&["u3", "2", "q2", "C", "true", "-1", "1", "6.0"]));
        let (records, warnings) = build_record_set(&table).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("positive integer"));
    }

    #[test]
    fn out_of_range_total_score_kept_but_warned() {
        let mut table = full_table();
        table.rows.push(row(&["u3", "2", "q2", "C", "true", "1", "1", "12.0"]));
        let (records, warnings) = build_record_set(&table).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("0-10"));
    }

    #[test]
    fn integral_float_cells_accepted_for_integer_columns() {
        let mut table = full_table();
        table.rows.push(row(&["u3", "2.0", "q2", "C", "1", "3.0", "0.5", "5.0"]));
        let (records, warnings) = build_record_set(&table).unwrap();
        assert!(warnings.is_empty());
        let last = &records.records()[2];
        assert_eq!(last.question_no, 2);
        assert_eq!(last.attempts, 3);
        assert!(last.is_correct);
    }
}
