//! Task-list state for the dashboard.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::Task;

/// Shared task list state, refreshed by the dashboard.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    /// `true` once the first list response (success or failure) arrived.
    pub loaded: bool,
    pub error: Option<String>,
}

impl TasksState {
    /// Apply a list response. A failed refresh keeps the last good items.
    pub fn apply(&mut self, result: Result<Vec<Task>, String>) {
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Tasks needing attention first, then alphabetical by name.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<Task> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| {
            b.needs_attention()
                .cmp(&a.needs_attention())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        items
    }
}
