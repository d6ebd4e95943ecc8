use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_not_authenticated() {
    let state = AuthState::default();
    assert!(!state.authenticated);
    assert!(state.username.is_none());
}

// =============================================================
// AuthState::from_session
// =============================================================

#[test]
fn from_session_without_token_is_signed_out() {
    let session = Session::in_memory();
    assert_eq!(AuthState::from_session(&session), AuthState::default());
}

#[test]
fn from_session_with_token_is_signed_in_without_username() {
    let session = Session::in_memory();
    session.set("abc");
    let state = AuthState::from_session(&session);
    assert!(state.authenticated);
    assert!(state.username.is_none());
}

#[test]
fn signed_in_records_username() {
    let state = AuthState::signed_in("alice");
    assert!(state.authenticated);
    assert_eq!(state.username.as_deref(), Some("alice"));
}
