//! Scoring-trend summaries.
//!
//! The fixed score-range buckets and the per-question min/max table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::RecordSet;

/// Fixed, right-inclusive score buckets: (0,2], (2,5], (5,8], (8,10].
const SCORE_BUCKETS: [(f64, f64, &str); 4] = [
    (0.0, 2.0, "0-2"),
    (2.0, 5.0, "3-5"),
    (5.0, 8.0, "6-8"),
    (8.0, 10.0, "9-10"),
];

/// A labeled score-range bucket with its row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCount {
    pub label: String,
    pub count: usize,
}

/// Min and max `total_score` observed for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionScoreRange {
    pub question_no: i64,
    pub min: f64,
    pub max: f64,
}

/// The scoring-trend metric family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendMetrics {
    /// Rows per fixed score bucket; every label present, zero counts kept.
    pub score_ranges: Vec<RangeCount>,
    /// Min/max `total_score` per question, ordered by `question_no`.
    pub per_question_range: Vec<QuestionScoreRange>,
}

pub fn compute(records: &RecordSet) -> TrendMetrics {
    TrendMetrics {
        score_ranges: score_ranges(records),
        per_question_range: per_question_range(records),
    }
}

/// Count rows per fixed bucket.
///
/// Bounds are right-inclusive, so a `total_score` of exactly 0 falls in no
/// bucket, and values outside (0, 10] are excluded from the distribution
/// rather than treated as errors.
pub fn score_ranges(records: &RecordSet) -> Vec<RangeCount> {
    let mut counts = [0usize; SCORE_BUCKETS.len()];
    for r in records.iter() {
        for (i, (lower, upper, _)) in SCORE_BUCKETS.iter().enumerate() {
            if r.total_score > *lower && r.total_score <= *upper {
                counts[i] += 1;
                break;
            }
        }
    }
    SCORE_BUCKETS
        .iter()
        .zip(counts)
        .map(|((_, _, label), count)| RangeCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Min and max `total_score` grouped by question, ordered by `question_no`.
pub fn per_question_range(records: &RecordSet) -> Vec<QuestionScoreRange> {
    let mut groups: BTreeMap<i64, (f64, f64)> = BTreeMap::new();
    for r in records.iter() {
        let entry = groups
            .entry(r.question_no)
            .or_insert((r.total_score, r.total_score));
        entry.0 = entry.0.min(r.total_score);
        entry.1 = entry.1.max(r.total_score);
    }
    groups
        .into_iter()
        .map(|(question_no, (min, max))| QuestionScoreRange {
            question_no,
            min,
            max,
        })
        .collect()
}
