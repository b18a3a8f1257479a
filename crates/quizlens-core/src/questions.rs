//! Question-level analysis.
//!
//! Frequency tables over `question_no`: most attempted, most/least correct,
//! most wrong, plus the correct-vs-incorrect totals. Top-N ordering is
//! descending by count with ties broken by first appearance in the
//! frequency table.

use serde::{Deserialize, Serialize};

use crate::record::{QuizResponseRecord, RecordSet};
use crate::util::value_counts;

/// How many questions the top-N tables keep.
pub const TOP_QUESTIONS: usize = 10;

/// A question paired with a row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCount {
    pub question_no: i64,
    pub count: usize,
}

/// Labeled correct/incorrect row totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTotals {
    pub correct: usize,
    pub incorrect: usize,
}

/// The question-level metric family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionMetrics {
    /// Row frequency per question, descending, top 10.
    pub most_attempted: Vec<QuestionCount>,
    /// Correct-row frequency per question, descending, top 10.
    pub most_correct: Vec<QuestionCount>,
    /// The 10 smallest entries of the same correct-count table, ascending.
    pub least_correct: Vec<QuestionCount>,
    /// Incorrect-row frequency per question, descending, top 10.
    pub most_wrong: Vec<QuestionCount>,
    pub outcome_totals: OutcomeTotals,
}

pub fn compute(records: &RecordSet) -> QuestionMetrics {
    // least_correct reuses the correct-count table rather than recomputing
    // a separate "worst" aggregate.
    let correct_counts = correct_answer_counts(records);
    let most_correct = top(correct_counts.clone(), TOP_QUESTIONS);
    let mut least_correct = correct_counts;
    least_correct.sort_by_key(|q| q.count);
    least_correct.truncate(TOP_QUESTIONS);

    QuestionMetrics {
        most_attempted: most_attempted(records),
        most_correct,
        least_correct,
        most_wrong: most_wrong(records),
        outcome_totals: outcome_totals(records),
    }
}

/// Row frequency per question, descending, top [`TOP_QUESTIONS`].
pub fn most_attempted(records: &RecordSet) -> Vec<QuestionCount> {
    top(question_frequency(records.iter()), TOP_QUESTIONS)
}

/// Correct-row frequency per question, in first-appearance order (unsliced).
pub fn correct_answer_counts(records: &RecordSet) -> Vec<QuestionCount> {
    question_frequency(records.iter().filter(|r| r.is_correct))
}

/// Incorrect-row frequency per question, descending, top [`TOP_QUESTIONS`].
pub fn most_wrong(records: &RecordSet) -> Vec<QuestionCount> {
    top(
        question_frequency(records.iter().filter(|r| !r.is_correct)),
        TOP_QUESTIONS,
    )
}

pub fn outcome_totals(records: &RecordSet) -> OutcomeTotals {
    let correct = records.iter().filter(|r| r.is_correct).count();
    OutcomeTotals {
        correct,
        incorrect: records.len() - correct,
    }
}

fn question_frequency<'a, I>(rows: I) -> Vec<QuestionCount>
where
    I: Iterator<Item = &'a QuizResponseRecord>,
{
    value_counts(rows.map(|r| r.question_no))
        .into_iter()
        .map(|(question_no, count)| QuestionCount { question_no, count })
        .collect()
}

/// Stable descending sort on the count, truncated to `n`; ties keep the
/// frequency table's first-appearance order.
fn top(mut counts: Vec<QuestionCount>, n: usize) -> Vec<QuestionCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
