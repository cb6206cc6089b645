//! Renderable model of the execution-history comparison view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate turns a [`HistoryView`] into markup. Everything the
//! markup needs (labels, change flags, display text) is decided here so the
//! component stays a thin loop and the behaviour stays testable natively.
//!
//! NEIGHBOUR POLICY
//! ================
//! The "previous" state of entry `i` is the state of entry `i + 1` in the
//! *filtered* list, not the immediately preceding run overall. Runs dropped by
//! [`relevant_executions`] never act as a comparison baseline.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Serialize;
use serde_json::Value;
use time::UtcOffset;

use crate::detect::relevant_executions;
use crate::diff::{FieldDiff, diff_fields, display_value};
use crate::format::format_timestamp;
use crate::record::{ExecutionRecord, StateMap};

/// Heading of the left-hand comparison column.
pub const PREVIOUS_STATE_LABEL: &str = "Previous State";
/// Badge shown in the header when the trigger condition fired.
pub const CONDITION_MET_LABEL: &str = "Condition Met";

/// Heading of the right-hand comparison column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateLabel {
    /// No previous column is shown.
    Current,
    /// Shown beside a previous column.
    New,
}

impl StateLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "Current State",
            Self::New => "New State",
        }
    }
}

/// A field of the previous snapshot, shown without change annotation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateField {
    pub key: String,
    pub value: Value,
}

impl StateField {
    #[must_use]
    pub fn display(&self) -> String {
        display_value(&self.value)
    }
}

/// Two-column state comparison for one execution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateComparison {
    /// Neighbour's state, present only when the neighbour exists and has one.
    pub previous: Option<Vec<StateField>>,
    pub current: Vec<FieldDiff>,
    pub current_label: StateLabel,
}

impl StateComparison {
    #[must_use]
    pub fn new(current: &StateMap, previous: Option<&StateMap>) -> Self {
        let previous_fields = previous.map(|prev| {
            prev.iter()
                .map(|(key, value)| StateField {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect()
        });
        let current_label = if previous.is_some() {
            StateLabel::New
        } else {
            StateLabel::Current
        };
        Self {
            previous: previous_fields,
            current: diff_fields(current, previous),
            current_label,
        }
    }

    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.current.iter().filter(|field| field.changed).count()
    }
}

/// Header line of an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryHeader {
    /// Formatted start time, or the invalid-date placeholder.
    pub started_at: String,
    pub condition_met: bool,
}

impl EntryHeader {
    #[must_use]
    pub fn badge(&self) -> Option<&'static str> {
        self.condition_met.then_some(CONDITION_MET_LABEL)
    }
}

/// One rendered block of the history view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Render key, taken from the execution id.
    pub id: String,
    pub header: EntryHeader,
    pub summary: Option<String>,
    pub comparison: Option<StateComparison>,
    /// Trailing note, independent of the comparison.
    pub answer: Option<String>,
}

impl HistoryEntry {
    fn build(record: &ExecutionRecord, previous_state: Option<&StateMap>, offset: UtcOffset) -> Self {
        Self {
            id: record.id.clone(),
            header: EntryHeader {
                started_at: format_timestamp(&record.started_at, offset),
                condition_met: record.condition_met,
            },
            summary: record
                .has_summary()
                .then(|| record.change_summary.clone())
                .flatten(),
            comparison: record
                .current_state()
                .map(|current| StateComparison::new(current, previous_state)),
            answer: record.answer().filter(|a| !a.is_empty()).map(str::to_owned),
        }
    }
}

/// Whole comparison view derived from one list of executions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum HistoryView {
    /// Nothing relevant happened; rendered as an explicit empty state.
    Empty,
    Entries(Vec<HistoryEntry>),
}

impl HistoryView {
    /// Derive the view from `records` (most recent first), labelling times in
    /// the viewer's `offset`.
    #[must_use]
    pub fn build(records: &[ExecutionRecord], offset: UtcOffset) -> Self {
        let relevant = relevant_executions(records);
        if relevant.is_empty() {
            return Self::Empty;
        }
        let entries = relevant
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let previous_state = relevant.get(index + 1).and_then(|next| next.current_state());
                HistoryEntry::build(record, previous_state, offset)
            })
            .collect();
        Self::Entries(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Total changed fields across all entries.
    #[must_use]
    pub fn changed_field_count(&self) -> usize {
        self.entries()
            .iter()
            .filter_map(|entry| entry.comparison.as_ref())
            .map(StateComparison::changed_count)
            .sum()
    }
}
