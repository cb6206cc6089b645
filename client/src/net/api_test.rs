use super::*;

#[test]
fn task_endpoint_formats_expected_path() {
    assert_eq!(task_endpoint("t-42"), "/api/tasks/t-42");
}

#[test]
fn task_executions_endpoint_formats_expected_path() {
    assert_eq!(task_executions_endpoint("t-42"), "/api/tasks/t-42/executions");
}

#[test]
fn failure_message_prefers_backend_error_field() {
    assert_eq!(
        failure_message("sign-in", 401, r#"{"error":"invalid credentials"}"#),
        "sign-in failed: invalid credentials"
    );
}

#[test]
fn failure_message_accepts_message_field() {
    assert_eq!(
        failure_message("waitlist signup", 409, r#"{"message":"already on the list"}"#),
        "waitlist signup failed: already on the list"
    );
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message("loading tasks", 502, "<html>bad gateway</html>"), "loading tasks failed: 502");
    assert_eq!(failure_message("loading tasks", 500, ""), "loading tasks failed: 500");
}

#[test]
fn failure_message_ignores_blank_detail() {
    assert_eq!(failure_message("registration", 400, r#"{"error":"  "}"#), "registration failed: 400");
}
