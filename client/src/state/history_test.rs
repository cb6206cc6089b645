use super::*;
use executions::{ExecutionResult, StateMap};
use serde_json::json;

fn record(id: &str, status: &str) -> ExecutionRecord {
    let mut state = StateMap::new();
    state.insert("status".to_owned(), json!(status));
    ExecutionRecord {
        id: id.to_owned(),
        started_at: "2024-03-05T14:07:00Z".to_owned(),
        condition_met: true,
        change_summary: None,
        result: Some(ExecutionResult {
            current_state: Some(state),
            answer: None,
        }),
    }
}

#[test]
fn default_displays_loading() {
    let state = ExecutionHistoryState::default();
    assert_eq!(state.display(UtcOffset::UTC), HistoryDisplay::Loading);
}

#[test]
fn loaded_empty_list_is_distinct_from_loading() {
    let mut state = ExecutionHistoryState::default();
    let seq = state.begin("t1");
    assert!(state.finish(seq, Ok(Vec::new())));
    assert_eq!(state.display(UtcOffset::UTC), HistoryDisplay::Ready(HistoryView::Empty));
}

#[test]
fn failure_is_displayed() {
    let mut state = ExecutionHistoryState::default();
    let seq = state.begin("t1");
    state.finish(seq, Err("loading history failed: 500".to_owned()));
    assert_eq!(
        state.display(UtcOffset::UTC),
        HistoryDisplay::Failed("loading history failed: 500".to_owned())
    );
}

#[test]
fn stale_response_is_dropped() {
    let mut state = ExecutionHistoryState::default();
    let first = state.begin("t1");
    let second = state.begin("t1");
    assert!(!state.finish(first, Ok(vec![record("old", "up")])));
    assert!(state.finish(second, Ok(vec![record("new", "down")])));

    let HistoryDisplay::Ready(view) = state.display(UtcOffset::UTC) else {
        panic!("expected ready view");
    };
    assert_eq!(view.entries()[0].id, "new");
}

#[test]
fn refresh_keeps_records_visible_for_same_task() {
    let mut state = ExecutionHistoryState::default();
    let seq = state.begin("t1");
    state.finish(seq, Ok(vec![record("a", "up")]));
    state.begin("t1");
    assert!(matches!(state.load, LoadState::Loaded(_)));
    assert!(!state.is_refreshing());
}

#[test]
fn switching_task_clears_records() {
    let mut state = ExecutionHistoryState::default();
    let seq = state.begin("t1");
    state.finish(seq, Ok(vec![record("a", "up")]));
    state.begin("t2");
    assert_eq!(state.load, LoadState::Loading);
    assert_eq!(state.task_id.as_deref(), Some("t2"));
    assert!(state.is_refreshing());
}

#[test]
fn display_is_rederived_from_latest_records() {
    let mut state = ExecutionHistoryState::default();
    let seq = state.begin("t1");
    state.finish(seq, Ok(vec![record("b", "down"), record("a", "up")]));
    let HistoryDisplay::Ready(first) = state.display(UtcOffset::UTC) else {
        panic!("expected ready view");
    };
    assert_eq!(first.changed_field_count(), 1);

    let seq = state.begin("t1");
    state.finish(seq, Ok(vec![record("c", "down")]));
    let HistoryDisplay::Ready(second) = state.display(UtcOffset::UTC) else {
        panic!("expected ready view");
    };
    assert_eq!(second.entries().len(), 1);
    assert_eq!(second.changed_field_count(), 0);
}

#[test]
fn switching_tasks_retires_the_earlier_request() {
    let mut state = ExecutionHistoryState::default();
    let first = state.begin("task-a");
    assert!(state.is_current(first));

    let second = state.begin("task-b");
    assert!(!state.is_current(first));
    assert!(state.is_current(second));

    assert!(!state.finish(first, Ok(vec![record("a1", "up")])));
    assert_eq!(state.task_id.as_deref(), Some("task-b"));
    assert_eq!(state.load, LoadState::Loading);
}
