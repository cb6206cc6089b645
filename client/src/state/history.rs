//! Execution-history load state for the task detail page.
//!
//! DESIGN
//! ======
//! Only the raw records are stored. The comparison view is re-derived from
//! them on every read, so a refresh can never leave stale per-field flags
//! behind. Each request carries a sequence number and responses from
//! superseded requests are dropped.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use executions::HistoryView;
use time::UtcOffset;

use crate::net::types::ExecutionRecord;

/// Where the current history request stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<ExecutionRecord>),
    Failed(String),
}

/// What the history component should render.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryDisplay {
    Loading,
    Failed(String),
    Ready(HistoryView),
}

/// Execution-history state for one task page.
#[derive(Clone, Debug, Default)]
pub struct ExecutionHistoryState {
    pub task_id: Option<String>,
    pub load: LoadState,
    request_seq: u64,
}

impl ExecutionHistoryState {
    /// Start a request for `task_id` and return its sequence number.
    ///
    /// Records from an earlier load of the same task stay visible until the
    /// new response arrives; switching tasks clears them.
    pub fn begin(&mut self, task_id: &str) -> u64 {
        self.request_seq += 1;
        let same_task = self.task_id.as_deref() == Some(task_id);
        if !(same_task && matches!(self.load, LoadState::Loaded(_))) {
            self.load = LoadState::Loading;
        }
        self.task_id = Some(task_id.to_owned());
        self.request_seq
    }

    /// `true` while `seq` is the most recent request.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Apply the response for request `seq`. Returns `false` if it was stale.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<ExecutionRecord>, String>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.load = match result {
            Ok(records) => LoadState::Loaded(records),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    #[must_use]
    pub fn display(&self, offset: UtcOffset) -> HistoryDisplay {
        match &self.load {
            LoadState::NotLoaded | LoadState::Loading => HistoryDisplay::Loading,
            LoadState::Failed(e) => HistoryDisplay::Failed(e.clone()),
            LoadState::Loaded(records) => HistoryDisplay::Ready(HistoryView::build(records, offset)),
        }
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.task_id.is_some() && self.load == LoadState::Loading
    }
}
