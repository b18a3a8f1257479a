//! quizlens-report — rendering for analytics reports.
//!
//! Turns a [`quizlens_core::report::AnalyticsReport`] into a self-contained
//! HTML dashboard or a Markdown summary. Renderers only read the report;
//! nothing here feeds back into the engine.

pub mod html;
pub mod markdown;
