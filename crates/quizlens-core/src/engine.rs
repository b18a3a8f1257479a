//! Report computation: validation plus every metric family.
//!
//! The engine is synchronous and pure: every metric is a function of the
//! record set alone, so metric families may be computed in any order and a
//! second run over the same records yields identical metrics. Report
//! generation is all-or-nothing; a fatal error produces no partial report.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::AnalyticsError;
use crate::record::{RawTable, RecordSet};
use crate::report::{AnalyticsReport, DatasetSummary};
use crate::validate::{build_record_set, DataQualityWarning};
use crate::{attempts, mistakes, overall, questions, trends};

/// Compute a full report from an already-typed record set.
///
/// `warnings` are the data-quality findings collected while the record set
/// was built; they are carried into the report verbatim. Fails fast on zero
/// rows rather than emitting placeholder values.
pub fn compute_report(
    label: &str,
    records: &RecordSet,
    warnings: Vec<DataQualityWarning>,
) -> Result<AnalyticsReport, AnalyticsError> {
    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "data-quality warnings present; affected rows excluded per metric"
        );
    }

    let overall = overall::compute(records)?;

    let users: HashSet<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
    let question_numbers: HashSet<i64> = records.iter().map(|r| r.question_no).collect();

    tracing::debug!(
        rows = records.len(),
        users = users.len(),
        questions = question_numbers.len(),
        "computing report"
    );

    Ok(AnalyticsReport {
        id: Uuid::new_v4(),
        created_at: chrono::Utc::now(),
        dataset: DatasetSummary {
            label: label.to_string(),
            row_count: records.len(),
            user_count: users.len(),
            question_count: question_numbers.len(),
        },
        overall,
        questions: questions::compute(records),
        attempts: attempts::compute(records),
        mistakes: mistakes::compute(records),
        trends: trends::compute(records),
        warnings,
    })
}

/// Validate a raw table, type its rows, and compute the report.
///
/// This is the one-call entry point wiring schema validation to the metric
/// families; the adapter that produced the table stays outside the engine.
pub fn analyze_table(label: &str, table: &RawTable) -> Result<AnalyticsReport, AnalyticsError> {
    let (records, warnings) = build_record_set(table)?;
    compute_report(label, &records, warnings)
}
