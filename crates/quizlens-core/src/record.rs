//! Core record types for quizlens.
//!
//! A [`RawTable`] is the column-normalized table handed over by a data
//! source adapter; a [`RecordSet`] is its typed, validated form, the only
//! input the metric engine reads. The engine never mutates a record set:
//! every aggregate produces a new value.

use serde::{Deserialize, Serialize};

/// Columns every quiz-response table must carry, post-normalization.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "total_score",
    "is_correct",
    "user_id",
    "question_no",
    "score",
    "attempts",
    "selected_option",
    "quiz_question_id",
];

/// A column-named table of raw string cells.
///
/// Column names are expected to already be normalized (trimmed, lowercased,
/// spaces replaced with underscores) by the adapter that produced the table;
/// the engine treats that as an input contract rather than re-normalizing.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Normalized column names, in source order.
    pub columns: Vec<String>,
    /// Row cells, one `Vec<String>` per source row.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// One answer submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResponseRecord {
    /// Respondent identifier.
    pub user_id: String,
    /// Question sequence number.
    pub question_no: i64,
    /// Stable identity of a question instance. May differ from
    /// `question_no` when questions are reused or shuffled.
    pub quiz_question_id: String,
    /// The option the user chose.
    pub selected_option: String,
    /// Whether `selected_option` was correct.
    pub is_correct: bool,
    /// Attempt count for this question by this user, read as given; the
    /// engine does not enforce monotonicity across repeated rows.
    pub attempts: i64,
    /// Points for this single response. Carried through but fed to no
    /// aggregate; scoring metrics read `total_score` (see DESIGN.md).
    pub score: f64,
    /// Quiz-level score associated with the row.
    pub total_score: f64,
}

/// The validated, typed record set the engine consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<QuizResponseRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<QuizResponseRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[QuizResponseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizResponseRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_lookup() {
        let table = RawTable::new(vec!["user_id".into(), "score".into()]);
        assert_eq!(table.column_index("score"), Some(1));
        assert_eq!(table.column_index("attempts"), None);
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = QuizResponseRecord {
            user_id: "u7".into(),
            question_no: 3,
            quiz_question_id: "q-3a".into(),
            selected_option: "B".into(),
            is_correct: true,
            attempts: 1,
            score: 1.0,
            total_score: 8.5,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: QuizResponseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_set_accessors() {
        let set = RecordSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }
}
