//! The analytics report: every metric family assembled into one value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attempts::AttemptMetrics;
use crate::mistakes::MistakeMetrics;
use crate::overall::OverallMetrics;
use crate::questions::QuestionMetrics;
use crate::trends::TrendMetrics;
use crate::validate::DataQualityWarning;

/// Summary of the dataset a report was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Human-readable label for the data source.
    pub label: String,
    pub row_count: usize,
    pub user_count: usize,
    pub question_count: usize,
}

/// A complete analytics report.
///
/// Serializes to a plain mapping from metric name to scalar or small
/// ordered table; renderers key off the field names to choose a rendering.
/// Created fresh per invocation, immutable once produced, and never cached
/// or persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was computed.
    pub created_at: DateTime<Utc>,
    pub dataset: DatasetSummary,
    pub overall: OverallMetrics,
    pub questions: QuestionMetrics,
    pub attempts: AttemptMetrics,
    pub mistakes: MistakeMetrics,
    pub trends: TrendMetrics,
    /// Non-fatal data-quality findings from validation.
    pub warnings: Vec<DataQualityWarning>,
}
