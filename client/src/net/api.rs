//! REST helpers for the task store, chat service, and session provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the `/api`
//! proxy. Server-side (SSR): stubs, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Task-store calls resolve to `Result<_, ApiError>` so widgets can show the
//! failure inline. Auth calls degrade to `Option`/`Result<_, String>` so a
//! failed session fetch renders the logged-out UI instead of crashing
//! hydration. No call retries; no client-side timeout is enforced.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Task, TaskFilter, TaskUpdate, User};

/// Maximum task title length in characters, after trimming.
pub const TITLE_MAX_CHARS: usize = 200;

#[cfg(any(test, feature = "hydrate"))]
const CHAT_ENDPOINT: &str = "/api/chat";
#[cfg(any(test, feature = "hydrate"))]
const SESSION_ENDPOINT: &str = "/api/auth/get-session";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in/email";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up/email";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_OUT_ENDPOINT: &str = "/api/auth/sign-out";

/// Trim and length-check a task title before it goes anywhere near the wire.
///
/// # Errors
///
/// Returns `ApiError::Validation` for empty or over-long titles.
pub fn validate_title(input: &str) -> Result<String, ApiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("Title is required".to_owned()));
    }
    if trimmed.chars().count() > TITLE_MAX_CHARS {
        return Err(ApiError::Validation(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(trimmed.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn tasks_endpoint(user_id: &str) -> String {
    format!("/api/{user_id}/tasks")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(user_id: &str, task_id: i64) -> String {
    format!("/api/{user_id}/tasks/{task_id}")
}

/// Query pairs for the list endpoint; empty filter yields no pairs.
#[cfg(any(test, feature = "hydrate"))]
fn filter_query_pairs(filter: &TaskFilter) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    let title = filter.title.trim();
    if !title.is_empty() {
        pairs.push(("title", title.to_owned()));
    }
    if let Some(priority) = filter.priority {
        pairs.push(("priority", priority.as_str().to_owned()));
    }
    pairs
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_failure_message(action: &str, status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct AuthErrorBody {
        message: String,
    }
    match serde_json::from_str::<AuthErrorBody>(body) {
        Ok(parsed) if !parsed.message.trim().is_empty() => parsed.message,
        _ => format!("{action} failed with status {status}"),
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode_json<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(network_error)
}

// =============================================================================
// TASK STORE
// =============================================================================

/// Fetch the full task list for a user, newest snapshot wins.
///
/// # Errors
///
/// `ApiError::Network` on transport failure, `ApiError::Server` on non-2xx.
pub async fn list_tasks(user_id: &str, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let pairs = filter_query_pairs(filter);
        let resp = gloo_net::http::Request::get(&tasks_endpoint(user_id))
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(network_error)?;
        decode_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, filter);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a task with the given title; the store assigns `id`,
/// `completed=false`, and the default priority.
///
/// # Errors
///
/// `ApiError::Validation` before any request for a bad title, otherwise the
/// usual transport/server variants.
pub async fn create_task(user_id: &str, title: &str) -> Result<Task, ApiError> {
    let title = validate_title(title)?;
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "title": title });
        let resp = gloo_net::http::Request::post(&tasks_endpoint(user_id))
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        decode_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, title);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Replace a task's title/completed, optionally changing priority.
///
/// # Errors
///
/// `ApiError::NotFound` when the task no longer exists.
pub async fn update_task(
    user_id: &str,
    task_id: i64,
    update: &TaskUpdate,
) -> Result<Task, ApiError> {
    let _ = validate_title(&update.title)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&task_endpoint(user_id, task_id))
            .json(update)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        decode_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, task_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a task by id. Not idempotent: a second delete of the same id
/// returns `ApiError::NotFound`, and callers must not retry blindly.
///
/// # Errors
///
/// `ApiError::NotFound` for an already-deleted id.
pub async fn delete_task(user_id: &str, task_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&task_endpoint(user_id, task_id))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, task_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Send a free-text message to the assistant and return its reply.
/// The assistant may mutate tasks server-side as a side effect, so callers
/// should publish `TasksChanged` after a successful exchange.
///
/// # Errors
///
/// The usual transport/server variants; the reply text is never partial.
pub async fn send_chat(user_id: &str, message: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct ChatResponse {
            response: String,
        }
        let body = serde_json::json!({ "user_id": user_id, "message": message });
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let decoded: ChatResponse = decode_json(resp).await?;
        Ok(decoded.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, message);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// =============================================================================
// SESSION PROVIDER
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct SessionBody {
    user: User,
}

/// Fetch the current session, if any. Returns `None` when logged out, on
/// the server, or when the provider is unreachable.
pub async fn fetch_session() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        // The provider answers `null` when no session exists.
        let body: Option<SessionBody> = resp.json().await.ok()?;
        body.map(|s| s.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password.
///
/// # Errors
///
/// Returns the provider's error message, or a generic status line.
pub async fn sign_in_email(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(auth_failure_message("sign in", resp.status(), &text));
        }
        let session: SessionBody = resp.json().await.map_err(|e| e.to_string())?;
        Ok(session.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account with name (optional), email, and password.
///
/// # Errors
///
/// Returns the provider's error message, or a generic status line.
pub async fn sign_up_email(name: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post(SIGN_UP_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(auth_failure_message("sign up", resp.status(), &text));
        }
        let session: SessionBody = resp.json().await.map_err(|e| e.to_string())?;
        Ok(session.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// End the current session. Failures are ignored; the caller clears local
/// auth state regardless.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT).send().await;
    }
}
