use super::*;

#[test]
fn redirect_warning_names_target_and_cause() {
    assert_eq!(redirect_warning("/login", "SecurityError"), "redirect to /login failed: SecurityError");
}
