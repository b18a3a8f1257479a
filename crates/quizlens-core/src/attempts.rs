//! Attempt-pattern analysis.
//!
//! How often users retry: the attempt-count distribution, per-question
//! attempt averages, and the completion/first-try/retry/all-wrong user
//! counts.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::record::RecordSet;

/// An attempt count paired with the number of rows carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCount {
    pub attempts: i64,
    pub count: usize,
}

/// A question paired with its mean attempt count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAttemptAverage {
    pub question_no: i64,
    pub avg_attempts: f64,
}

/// The attempt-pattern metric family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptMetrics {
    /// Frequency of each distinct attempts value, ascending.
    pub attempt_distribution: Vec<AttemptCount>,
    /// Mean attempts per question, ordered by `question_no`.
    pub avg_attempts_per_question: Vec<QuestionAttemptAverage>,
    /// Users whose distinct attempted questions cover the whole dataset.
    pub users_completed_all: usize,
    /// Distinct users with at least one first-attempt correct row.
    pub first_attempt_correct_users: usize,
    /// Distinct users with at least one row needing more than one attempt.
    pub retry_users: usize,
    /// Users with no correct row at all.
    pub all_wrong_users: usize,
}

pub fn compute(records: &RecordSet) -> AttemptMetrics {
    AttemptMetrics {
        attempt_distribution: attempt_distribution(records),
        avg_attempts_per_question: avg_attempts_per_question(records),
        users_completed_all: users_completed_all(records),
        first_attempt_correct_users: first_attempt_correct_users(records),
        retry_users: retry_users(records),
        all_wrong_users: all_wrong_users(records),
    }
}

/// Frequency of each distinct `attempts` value, ascending by attempt count.
/// Rows with a non-positive attempts value are data-quality defects and are
/// excluded here (they are warned about at validation time).
pub fn attempt_distribution(records: &RecordSet) -> Vec<AttemptCount> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for r in records.iter().filter(|r| r.attempts >= 1) {
        *counts.entry(r.attempts).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(attempts, count)| AttemptCount { attempts, count })
        .collect()
}

/// Mean of `attempts` grouped by question, ordered by `question_no`.
/// Non-positive attempts values are excluded, matching the distribution.
pub fn avg_attempts_per_question(records: &RecordSet) -> Vec<QuestionAttemptAverage> {
    let mut groups: BTreeMap<i64, (i64, usize)> = BTreeMap::new();
    for r in records.iter().filter(|r| r.attempts >= 1) {
        let entry = groups.entry(r.question_no).or_insert((0, 0));
        entry.0 += r.attempts;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(question_no, (sum, n))| QuestionAttemptAverage {
            question_no,
            avg_attempts: sum as f64 / n as f64,
        })
        .collect()
}

/// Users whose distinct attempted questions equal the dataset-wide distinct
/// question count.
///
/// This conflates "all questions in this dataset" with "all questions
/// assigned to this user" when quizzes vary per user; kept deliberately,
/// matching the upstream data contract (see DESIGN.md).
pub fn users_completed_all(records: &RecordSet) -> usize {
    let total_questions: HashSet<i64> = records.iter().map(|r| r.question_no).collect();
    let mut per_user: BTreeMap<&str, HashSet<i64>> = BTreeMap::new();
    for r in records.iter() {
        per_user
            .entry(r.user_id.as_str())
            .or_default()
            .insert(r.question_no);
    }
    per_user
        .values()
        .filter(|questions| questions.len() == total_questions.len())
        .count()
}

/// Distinct users with at least one row where `attempts == 1` and the
/// answer was correct.
pub fn first_attempt_correct_users(records: &RecordSet) -> usize {
    records
        .iter()
        .filter(|r| r.attempts == 1 && r.is_correct)
        .map(|r| r.user_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Distinct users with at least one row where `attempts > 1`.
pub fn retry_users(records: &RecordSet) -> usize {
    records
        .iter()
        .filter(|r| r.attempts > 1)
        .map(|r| r.user_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Users whose correct-row count is zero.
pub fn all_wrong_users(records: &RecordSet) -> usize {
    let all_users: HashSet<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
    let users_with_correct: HashSet<&str> = records
        .iter()
        .filter(|r| r.is_correct)
        .map(|r| r.user_id.as_str())
        .collect();
    all_users.len() - users_with_correct.len()
}
