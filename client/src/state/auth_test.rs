use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    // The session is unknown until the initial fetch resolves.
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn auth_state_signed_in_resolves_loading() {
    let user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: None };
    let state = AuthState::signed_in(user.clone());
    assert_eq!(state.user, Some(user));
    assert!(!state.loading);
}

#[test]
fn auth_state_signed_out_resolves_loading() {
    let state = AuthState::signed_out();
    assert!(state.user.is_none());
    assert!(!state.loading);
}
