//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate: pages check this state to decide whether the
//! authenticated task area mounts at all. Populated once on load by
//! `util::session::init_session` and mutated by the auth form / sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and session-fetch status.
///
/// `loading` starts `true` and flips to `false` once the initial session
/// fetch resolves, whether or not a user was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// A resolved, signed-in state.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// A resolved, signed-out state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }
}
