//! Login page with marketing hero and the tabbed auth form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_form::AuthForm;
use crate::state::auth::AuthState;
use crate::util::session::install_auth_redirect;

/// Login page — redirects to the task area once a session exists.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_auth_redirect(auth, navigate);

    view! {
        <div class="login-page">
            <div class="login-page__hero">
                <span class="login-page__brand">"Taskboard"</span>
                <h1>"Focus on What Matters."</h1>
                <p>"The minimal task manager for high performers."</p>
                <ul class="login-page__points">
                    <li>"Fast Performance"</li>
                    <li>"Secure Cloud"</li>
                    <li>"Minimal Design"</li>
                </ul>
            </div>
            <div class="login-page__panel">
                <AuthForm/>
            </div>
        </div>
    }
}
