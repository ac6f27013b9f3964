//! Session lifecycle and route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session provider is an external collaborator: this module only calls
//! its REST surface and mirrors the result into `AuthState`. Route
//! components apply identical redirect behavior on both sides of the gate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Resolve the current session once on load. Runs only in the browser; the
/// SSR pass leaves `AuthState` in its loading default so hydration takes
/// over without a flash of the wrong gate.
pub fn init_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_session().await {
            Some(user) => auth.set(AuthState::signed_in(user)),
            None => auth.set(AuthState::signed_out()),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to the task area whenever auth has loaded with a user present.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// End the session remotely, then clear local auth state.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::sign_out().await;
        auth.set(AuthState::signed_out());
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
