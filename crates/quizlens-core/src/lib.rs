//! quizlens-core — Record model, validation, and the metric computation engine.
//!
//! This crate defines the quiz-response record set, the schema validator,
//! and the pure aggregation routines that turn a record set into an
//! [`report::AnalyticsReport`]. It performs no I/O; data sources and
//! rendering live in sibling crates.

pub mod attempts;
pub mod engine;
pub mod error;
pub mod mistakes;
pub mod overall;
pub mod questions;
pub mod record;
pub mod report;
pub mod trends;
pub mod validate;

mod util;
