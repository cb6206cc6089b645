//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case JSON. Optional fields default
//! so older backends that omit them still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use executions::ExecutionRecord;

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Lifecycle state of a monitoring task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Active,
    Paused,
    /// The last run errored before it could evaluate the page.
    Failing,
    /// A status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A monitored page and the rule that triggers it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    /// Page being watched.
    pub url: String,
    /// Natural-language trigger rule, e.g. "price drops below $20".
    #[serde(default)]
    pub condition: Option<String>,
    /// Human-readable cadence, e.g. "every hour".
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default)]
    pub last_change_summary: Option<String>,
}

impl Task {
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.status == TaskStatus::Failing
    }
}

/// One release note in the public changelog feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    pub published_at: String,
    pub title: String,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WaitlistRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}
