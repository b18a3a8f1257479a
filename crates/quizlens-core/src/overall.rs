//! Overall quiz performance metrics.
//!
//! Single-pass descriptive statistics over the whole record set: mean score,
//! accuracy rate, all-correct users, best/worst question by mean score, and
//! the observed-range score histogram.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::record::RecordSet;
use crate::util::mean;

/// Number of equal-width bins in the observed-range score histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// A question paired with its mean `total_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionMeanScore {
    pub question_no: i64,
    pub mean_score: f64,
}

/// One equal-width histogram bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// The overall-performance metric family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMetrics {
    /// Arithmetic mean of `total_score` over all rows.
    pub mean_score: f64,
    /// Percent of rows answered correctly, in [0, 100].
    pub accuracy_rate: f64,
    /// Users whose correct-row count equals their distinct attempted
    /// question count.
    pub users_all_correct: usize,
    pub best_question: QuestionMeanScore,
    pub worst_question: QuestionMeanScore,
    /// `total_score` histogram over [`HISTOGRAM_BINS`] equal-width bins.
    pub score_histogram: Vec<HistogramBin>,
}

pub fn compute(records: &RecordSet) -> Result<OverallMetrics, AnalyticsError> {
    let mean_score = mean_total_score(records)?;
    let accuracy_rate = accuracy_rate(records)?;
    let (best_question, worst_question) = best_and_worst_question(records)?;
    Ok(OverallMetrics {
        mean_score,
        accuracy_rate,
        users_all_correct: users_all_correct(records),
        best_question,
        worst_question,
        score_histogram: score_histogram(records, HISTOGRAM_BINS),
    })
}

/// Mean of `total_score`. Zero rows make the mean undefined, so this fails
/// with [`AnalyticsError::EmptyDataset`] rather than returning NaN.
pub fn mean_total_score(records: &RecordSet) -> Result<f64, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyDataset {
            metric: "mean_score",
        });
    }
    let scores: Vec<f64> = records.iter().map(|r| r.total_score).collect();
    Ok(mean(&scores))
}

/// Fraction of correct rows, as a percentage.
pub fn accuracy_rate(records: &RecordSet) -> Result<f64, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyDataset {
            metric: "accuracy_rate",
        });
    }
    let correct = records.iter().filter(|r| r.is_correct).count();
    Ok(correct as f64 / records.len() as f64 * 100.0)
}

/// Count of users whose correct-row count equals the number of distinct
/// questions they attempted. A user qualifies by answering every question
/// they attempted correctly, not every question in the dataset.
pub fn users_all_correct(records: &RecordSet) -> usize {
    let mut correct_rows: HashMap<&str, usize> = HashMap::new();
    let mut attempted: HashMap<&str, HashSet<i64>> = HashMap::new();

    for r in records.iter() {
        if r.is_correct {
            *correct_rows.entry(r.user_id.as_str()).or_default() += 1;
        }
        attempted
            .entry(r.user_id.as_str())
            .or_default()
            .insert(r.question_no);
    }

    attempted
        .iter()
        .filter(|(user, questions)| {
            correct_rows.get(*user).copied().unwrap_or(0) == questions.len()
        })
        .count()
}

/// Highest- and lowest-scoring questions by mean `total_score`.
///
/// Groups are visited in ascending `question_no` order and selection is
/// strict, so ties resolve to the first question in that order; the result
/// is deterministic even when every question ties.
pub fn best_and_worst_question(
    records: &RecordSet,
) -> Result<(QuestionMeanScore, QuestionMeanScore), AnalyticsError> {
    let mut groups: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for r in records.iter() {
        let entry = groups.entry(r.question_no).or_insert((0.0, 0));
        entry.0 += r.total_score;
        entry.1 += 1;
    }

    let mut best: Option<QuestionMeanScore> = None;
    let mut worst: Option<QuestionMeanScore> = None;
    for (question_no, (sum, n)) in groups {
        let mean_score = sum / n as f64;
        if best.as_ref().is_none_or(|b| mean_score > b.mean_score) {
            best = Some(QuestionMeanScore {
                question_no,
                mean_score,
            });
        }
        if worst.as_ref().is_none_or(|w| mean_score < w.mean_score) {
            worst = Some(QuestionMeanScore {
                question_no,
                mean_score,
            });
        }
    }

    match (best, worst) {
        (Some(best), Some(worst)) => Ok((best, worst)),
        _ => Err(AnalyticsError::EmptyDataset {
            metric: "best_worst_question",
        }),
    }
}

/// Histogram of `total_score` over `bins` equal-width bins spanning the
/// observed range. A degenerate range (all values equal) collapses to a
/// single bin; empty input yields no bins.
pub fn score_histogram(records: &RecordSet, bins: usize) -> Vec<HistogramBin> {
    if records.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for r in records.iter() {
        lo = lo.min(r.total_score);
        hi = hi.max(r.total_score);
    }

    if lo == hi {
        return vec![HistogramBin {
            lower: lo,
            upper: hi,
            count: records.len(),
        }];
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for r in records.iter() {
        let index = (((r.total_score - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
