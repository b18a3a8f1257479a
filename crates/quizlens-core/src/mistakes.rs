//! Error-pattern analysis over incorrect responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::RecordSet;
use crate::util::value_counts;

/// How many wrong options the top table keeps.
pub const TOP_WRONG_OPTIONS: usize = 5;

/// An answer option paired with how often it was wrongly selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCount {
    pub selected_option: String,
    pub count: usize,
}

/// The error-pattern metric family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MistakeMetrics {
    /// Most frequently selected wrong options, descending, top 5.
    pub top_wrong_options: Vec<OptionCount>,
    /// Distinct (user, question instance, option) groups that occur more
    /// than once among incorrect rows: repeated-mistake patterns, not
    /// occurrences.
    pub repeated_wrong_patterns: usize,
}

pub fn compute(records: &RecordSet) -> MistakeMetrics {
    MistakeMetrics {
        top_wrong_options: top_wrong_options(records),
        repeated_wrong_patterns: repeated_wrong_patterns(records),
    }
}

/// Frequency of `selected_option` among incorrect rows, descending, top
/// [`TOP_WRONG_OPTIONS`]; ties keep first-appearance order.
pub fn top_wrong_options(records: &RecordSet) -> Vec<OptionCount> {
    let mut counts: Vec<OptionCount> = value_counts(
        records
            .iter()
            .filter(|r| !r.is_correct)
            .map(|r| r.selected_option.clone()),
    )
    .into_iter()
    .map(|(selected_option, count)| OptionCount {
        selected_option,
        count,
    })
    .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_WRONG_OPTIONS);
    counts
}

/// Count of (`user_id`, `quiz_question_id`, `selected_option`) groups with
/// more than one incorrect row: the same user picked the same wrong option
/// on the same question instance more than once.
pub fn repeated_wrong_patterns(records: &RecordSet) -> usize {
    let mut groups: HashMap<(&str, &str, &str), usize> = HashMap::new();
    for r in records.iter().filter(|r| !r.is_correct) {
        *groups
            .entry((
                r.user_id.as_str(),
                r.quiz_question_id.as_str(),
                r.selected_option.as_str(),
            ))
            .or_default() += 1;
    }
    groups.values().filter(|&&count| count > 1).count()
}
