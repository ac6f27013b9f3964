//! Tabbed sign-in / sign-up form for the login page.
//!
//! The session provider owns all credential handling; this form only
//! validates shape locally, forwards the request, and mirrors the resolved
//! session into `AuthState`.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    SignUp,
}

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_sign_up_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("Password must be at least 8 characters.");
    }
    Ok((name.trim().to_owned(), email.to_owned(), password.to_owned()))
}

/// Auth form with Sign In / Sign Up tabs. On success the resolved user is
/// written into `AuthState`; the login page's redirect effect does the rest.
#[component]
pub fn AuthForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let tab = RwSignal::new(AuthTab::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let select_tab = move |next: AuthTab| {
        tab.set(next);
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);

        let validated = match tab.get() {
            AuthTab::SignIn => {
                validate_sign_in_input(&email.get(), &password.get()).map(|(e, p)| (None, e, p))
            }
            AuthTab::SignUp => validate_sign_up_input(&name.get(), &email.get(), &password.get())
                .map(|(n, e, p)| (Some(n), e, p)),
        };
        let (signup_name, email_value, password_value) = match validated {
            Ok(parts) => parts,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match signup_name {
                Some(n) => crate::net::api::sign_up_email(&n, &email_value, &password_value).await,
                None => crate::net::api::sign_in_email(&email_value, &password_value).await,
            };
            match result {
                Ok(user) => auth.set(AuthState::signed_in(user)),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (signup_name, email_value, password_value, auth);
        }
    };

    view! {
        <div class="auth-form">
            <div class="auth-form__tabs">
                <button
                    type="button"
                    class="auth-form__tab"
                    class:auth-form__tab--active=move || tab.get() == AuthTab::SignIn
                    on:click=move |_| select_tab(AuthTab::SignIn)
                >
                    "Sign In"
                </button>
                <button
                    type="button"
                    class="auth-form__tab"
                    class:auth-form__tab--active=move || tab.get() == AuthTab::SignUp
                    on:click=move |_| select_tab(AuthTab::SignUp)
                >
                    "Sign Up"
                </button>
            </div>

            <form class="auth-form__fields" on:submit=on_submit>
                <Show when=move || tab.get() == AuthTab::SignUp>
                    <label class="auth-form__label">
                        "Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Your name"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="••••••••"
                        minlength="8"
                        autocomplete=move || {
                            if tab.get() == AuthTab::SignUp { "new-password" } else { "current-password" }
                        }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || match (busy.get(), tab.get()) {
                        (true, AuthTab::SignIn) => "Signing in...",
                        (true, AuthTab::SignUp) => "Signing up...",
                        (false, AuthTab::SignIn) => "Sign In",
                        (false, AuthTab::SignUp) => "Sign Up",
                    }}
                </button>
            </form>
        </div>
    }
}
