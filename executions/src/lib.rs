//! Execution-history models and derivation helpers for Sitewatch task views.
//!
//! This crate is UI-framework agnostic so the `client` crate can consume it
//! directly when rendering the "what changed" comparison for a monitored task.
//!
//! PIPELINE
//! ========
//! Records enter [`detect`], which keeps only executions that changed state or
//! met their trigger condition. [`view`] walks that filtered list, pairs each
//! entry with its filtered neighbour, and asks [`diff`] which fields changed and
//! [`format`] for a header label. Every step is a pure function of its input.

pub mod detect;
pub mod diff;
pub mod format;
pub mod record;
pub mod view;

pub use detect::{is_relevant, relevant_executions};
pub use diff::{FieldDiff, canonical_json, diff_fields, display_value, values_equal};
pub use format::{INVALID_DATE_LABEL, format_timestamp, parse_timestamp};
pub use record::{ExecutionRecord, ExecutionResult, StateMap, parse_executions};
pub use view::{
    CONDITION_MET_LABEL, EntryHeader, HistoryEntry, HistoryView, PREVIOUS_STATE_LABEL, StateComparison, StateField,
    StateLabel,
};

/// Error returned by [`parse_executions`] and [`parse_timestamp`].
#[derive(Debug, thiserror::Error)]
pub enum ExecutionsError {
    /// The REST payload was not a list of execution records.
    #[error("failed to decode executions payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// A `started_at` value was not an ISO-8601 date-time.
    #[error("invalid timestamp: {raw:?}")]
    InvalidTimestamp { raw: String },
}
