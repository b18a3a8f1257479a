//! Engine error types.
//!
//! Both variants are fatal to report generation: a report is either complete
//! or not produced at all. Non-fatal findings are
//! [`crate::validate::DataQualityWarning`]s instead.

use thiserror::Error;

/// Errors that abort report generation.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// One or more required columns are absent from the input table.
    /// Carries every missing name, so the caller sees the complete
    /// deficiency in one pass.
    #[error("missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// An aggregate that needs at least one row was invoked on zero rows.
    #[error("empty record set: {metric} is undefined without rows")]
    EmptyDataset { metric: &'static str },
}

impl AnalyticsError {
    /// Returns the missing column names for a schema failure.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            AnalyticsError::Schema { missing } => Some(missing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_lists_every_column() {
        let err = AnalyticsError::Schema {
            missing: vec!["score".into(), "attempts".into()],
        };
        assert_eq!(err.to_string(), "missing required columns: score, attempts");
        assert_eq!(err.missing_columns().unwrap().len(), 2);
    }

    #[test]
    fn empty_dataset_names_the_metric() {
        let err = AnalyticsError::EmptyDataset { metric: "mean_score" };
        assert!(err.to_string().contains("mean_score"));
        assert!(err.missing_columns().is_none());
    }
}
