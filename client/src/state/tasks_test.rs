use super::*;
use crate::net::types::TaskStatus;

fn task(id: &str, name: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_owned(),
        name: name.to_owned(),
        url: format!("https://example.com/{id}"),
        condition: None,
        schedule: "every hour".to_owned(),
        status,
        last_run_at: None,
        last_change_summary: None,
    }
}

fn ids(items: &[Task]) -> Vec<&str> {
    items.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn default_state_is_not_loaded() {
    let state = TasksState::default();
    assert!(state.items.is_empty());
    assert!(!state.loaded);
    assert!(state.error.is_none());
}

#[test]
fn apply_ok_replaces_items_and_clears_error() {
    let mut state = TasksState {
        loading: true,
        error: Some("old".to_owned()),
        ..TasksState::default()
    };
    state.apply(Ok(vec![task("a", "Alpha", TaskStatus::Active)]));
    assert!(!state.loading);
    assert!(state.loaded);
    assert!(state.error.is_none());
    assert_eq!(ids(&state.items), vec!["a"]);
}

#[test]
fn apply_err_keeps_previous_items() {
    let mut state = TasksState::default();
    state.apply(Ok(vec![task("a", "Alpha", TaskStatus::Active)]));
    state.apply(Err("loading tasks failed: 502".to_owned()));
    assert_eq!(ids(&state.items), vec!["a"]);
    assert_eq!(state.error.as_deref(), Some("loading tasks failed: 502"));
}

#[test]
fn sorted_items_puts_failing_first_then_name() {
    let state = TasksState {
        items: vec![
            task("c", "charlie", TaskStatus::Active),
            task("b", "Bravo", TaskStatus::Failing),
            task("a", "alpha", TaskStatus::Paused),
            task("d", "Delta", TaskStatus::Failing),
        ],
        ..TasksState::default()
    };
    assert_eq!(ids(&state.sorted_items()), vec!["b", "d", "a", "c"]);
}
