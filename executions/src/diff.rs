//! Field-level comparison between two state snapshots.
//!
//! DESIGN
//! ======
//! Only the current snapshot is iterated. A key that is new in `current` is
//! shown but never flagged, and a key that disappeared from `previous` is not
//! surfaced at all. The view distinguishes "changed" from "appeared", and
//! removals are out of its reach.

#[cfg(test)]
#[path = "diff_test.rs"]
mod diff_test;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::record::StateMap;

/// One field of the current snapshot, annotated against the previous one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDiff {
    pub key: String,
    pub value: Value,
    /// `true` only when the key exists in both snapshots with unequal values.
    pub changed: bool,
}

impl FieldDiff {
    /// Display text for the field value.
    #[must_use]
    pub fn display(&self) -> String {
        display_value(&self.value)
    }
}

/// Annotate every field of `current` with whether it changed since `previous`.
///
/// Output order follows `current`, and each key appears exactly once.
#[must_use]
pub fn diff_fields(current: &StateMap, previous: Option<&StateMap>) -> Vec<FieldDiff> {
    current
        .iter()
        .map(|(key, value)| {
            let changed = previous
                .and_then(|prev| prev.get(key))
                .is_some_and(|before| !values_equal(value, before));
            FieldDiff {
                key: key.clone(),
                value: value.clone(),
                changed,
            }
        })
        .collect()
}

/// Deep structural equality for JSON-shaped values.
///
/// Object key order is ignored, array order is not. Numbers compare by value
/// when either side is a float, so `1` and `1.0` are equal.
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

#[allow(clippy::float_cmp)]
fn numbers_equal(x: &Number, y: &Number) -> bool {
    if x == y {
        return true;
    }
    if !(x.is_f64() || y.is_f64()) {
        return false;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Compact JSON with object keys sorted at every depth.
#[must_use]
pub fn canonical_json(value: &Value) -> String {
    sort_keys(value).to_string()
}

/// Text shown for a field value: strings bare, structures as canonical JSON,
/// everything else in its natural JSON form.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => canonical_json(value),
        other => other.to_string(),
    }
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(map.len());
            for key in keys {
                if let Some(inner) = map.get(key) {
                    sorted.insert(key.clone(), sort_keys(inner));
                }
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
