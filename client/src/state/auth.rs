//! Reactive auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `Session` is the source of truth for the credential but is not
//! reactive. Components that render differently when signed in (the nav bar)
//! read this mirror instead, and login/logout flows update both.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Authentication state tracking whether a credential is held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    /// Username from the last successful login in this page lifetime.
    pub username: Option<String>,
}

impl AuthState {
    /// Snapshot the session at startup. The username is not persisted.
    pub fn from_session(session: &Session) -> Self {
        Self { authenticated: session.is_present(), username: None }
    }

    pub fn signed_in(username: &str) -> Self {
        Self { authenticated: true, username: Some(username.to_owned()) }
    }
}
