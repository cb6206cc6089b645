use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar_url: None,
    }
}

#[test]
fn auth_state_default_no_user_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn resolve_with_user_signs_in() {
    let mut state = AuthState::pending();
    state.resolve(Some(user()));
    assert!(!state.loading);
    assert!(state.is_signed_in());
}

#[test]
fn resolve_without_user_finishes_loading() {
    let mut state = AuthState::pending();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}
