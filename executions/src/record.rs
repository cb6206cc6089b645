//! Execution records as delivered by the monitoring backend.
//!
//! DESIGN
//! ======
//! Records are read-only snapshots. Nothing in this crate mutates them; views
//! borrow from the caller's list for the duration of a single render.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ExecutionsError;

/// Field name to value snapshot of a monitored target, in backend order.
pub type StateMap = Map<String, Value>;

/// One completed run of a monitored task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Stable identifier, used as the render key.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// ISO-8601 start time of the run. Missing or null decodes to an empty
    /// string, which the formatter labels as an invalid date.
    #[serde(default, deserialize_with = "null_as_default")]
    pub started_at: String,
    /// Whether the task's trigger rule evaluated true for this run.
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition_met: bool,
    /// Short human-readable description of what changed, if anything did.
    #[serde(default)]
    pub change_summary: Option<String>,
    /// Structured output of the run.
    #[serde(default)]
    pub result: Option<ExecutionResult>,
}

/// Structured payload captured by a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// State of the monitored target at this execution.
    #[serde(default)]
    pub current_state: Option<StateMap>,
    /// Free-text summary produced by the monitoring task.
    #[serde(default)]
    pub answer: Option<String>,
}

impl ExecutionRecord {
    /// Captured target state, when the run produced one.
    #[must_use]
    pub fn current_state(&self) -> Option<&StateMap> {
        self.result.as_ref().and_then(|r| r.current_state.as_ref())
    }

    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.answer.as_deref())
    }

    /// `true` when the change summary is present and non-empty.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.change_summary.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Decode a REST response body into execution records.
///
/// Accepts either a bare JSON array or an `{ "executions": [...] }` envelope.
/// Order is preserved exactly as sent (most recent first).
///
/// # Errors
///
/// Returns [`ExecutionsError::Decode`] when the body is not JSON, matches
/// neither shape, or a record inside it fails to decode.
pub fn parse_executions(body: &str) -> Result<Vec<ExecutionRecord>, ExecutionsError> {
    let records = match serde_json::from_str::<Value>(body)? {
        Value::Object(mut envelope) => envelope.remove("executions").ok_or_else(|| {
            serde_json::Error::custom("expected an array or an object with an `executions` field")
        })?,
        other => other,
    };
    Ok(serde_json::from_value(records)?)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
