use super::*;
use serde_json::json;

// =============================================================
// Task
// =============================================================

#[test]
fn task_deserializes_with_defaults() {
    let task: Task = serde_json::from_value(json!({
        "id": "t1",
        "name": "Pricing page",
        "url": "https://example.com/pricing"
    }))
    .unwrap();
    assert_eq!(task.status, TaskStatus::Active);
    assert_eq!(task.schedule, "");
    assert_eq!(task.condition, None);
    assert_eq!(task.last_run_at, None);
    assert!(!task.needs_attention());
}

#[test]
fn task_status_parses_known_values() {
    for (raw, expected) in [
        ("active", TaskStatus::Active),
        ("paused", TaskStatus::Paused),
        ("failing", TaskStatus::Failing),
    ] {
        let status: TaskStatus = serde_json::from_value(json!(raw)).unwrap();
        assert_eq!(status, expected);
    }
}

#[test]
fn task_status_tolerates_unknown_values() {
    let status: TaskStatus = serde_json::from_value(json!("archived")).unwrap();
    assert_eq!(status, TaskStatus::Unknown);
}

#[test]
fn failing_task_needs_attention() {
    let task: Task = serde_json::from_value(json!({
        "id": "t1",
        "name": "Status page",
        "url": "https://status.example.com",
        "status": "failing"
    }))
    .unwrap();
    assert!(task.needs_attention());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn waitlist_request_omits_missing_company() {
    let body = serde_json::to_value(WaitlistRequest {
        email: "a@b.co".to_owned(),
        company: None,
    })
    .unwrap();
    assert_eq!(body, json!({ "email": "a@b.co" }));
}

#[test]
fn waitlist_request_includes_company() {
    let body = serde_json::to_value(WaitlistRequest {
        email: "a@b.co".to_owned(),
        company: Some("Acme".to_owned()),
    })
    .unwrap();
    assert_eq!(body, json!({ "email": "a@b.co", "company": "Acme" }));
}

#[test]
fn changelog_entry_body_defaults_to_empty() {
    let entry: ChangelogEntry = serde_json::from_value(json!({
        "version": "1.2.0",
        "published_at": "2024-03-05T00:00:00Z",
        "title": "Faster checks"
    }))
    .unwrap();
    assert_eq!(entry.body, "");
}
