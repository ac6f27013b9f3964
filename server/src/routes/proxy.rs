//! Reverse-proxy handlers for the external task store, chat service, and
//! session provider.
//!
//! DESIGN
//! ======
//! Handlers forward requests verbatim and pass upstream status codes and
//! bodies through untouched, so the browser sees exactly what the store
//! answered (including 404s and `{"detail": ...}` error bodies). The only
//! failure this layer adds is `502 Bad Gateway` when an upstream is
//! unreachable.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Path, RawQuery, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::state::AppState;

/// Request body size cap for forwarded auth calls.
const MAX_FORWARD_BODY_BYTES: usize = 64 * 1024;

/// A failed hop to an upstream service.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("request body unreadable")]
    BodyRead,
    #[error("upstream response could not be relayed")]
    Relay,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy failure");
        // Same `{"detail": ...}` error shape the task store uses, so the
        // client decodes proxy failures with the same path.
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

/// Characters that must not appear literally in a single path segment.
/// Axum hands us the segment percent-decoded, so it gets re-encoded before
/// being spliced into the upstream URL.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn tasks_url(base: &str, user_id: &str, query: Option<&str>) -> String {
    let user_id = encode_segment(user_id);
    match query {
        Some(q) if !q.is_empty() => format!("{base}/api/{user_id}/tasks?{q}"),
        _ => format!("{base}/api/{user_id}/tasks"),
    }
}

fn task_url(base: &str, user_id: &str, task_id: i64) -> String {
    let user_id = encode_segment(user_id);
    format!("{base}/api/{user_id}/tasks/{task_id}")
}

fn chat_url(base: &str) -> String {
    format!("{base}/api/chat")
}

fn auth_url(base: &str, path_and_query: &str) -> String {
    format!("{base}{path_and_query}")
}

/// Forward a JSON request and relay status + body back to the browser.
async fn forward_json(
    state: &AppState,
    method: reqwest::Method,
    url: &str,
    body: Option<serde_json::Value>,
) -> Result<Response, ProxyError> {
    let mut request = state.http.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let upstream = request.send().await?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| header::HeaderValue::from_static("application/json"));
    let bytes = upstream.bytes().await?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

/// `GET /api/{user_id}/tasks` — list, passing search/filter params through.
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    let url = tasks_url(&state.config.task_store_url, &user_id, query.as_deref());
    forward_json(&state, reqwest::Method::GET, &url, None).await
}

/// `POST /api/{user_id}/tasks` — create.
pub async fn create_task(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ProxyError> {
    let url = tasks_url(&state.config.task_store_url, &user_id, None);
    forward_json(&state, reqwest::Method::POST, &url, Some(body)).await
}

/// `PUT /api/{user_id}/tasks/{task_id}` — full replace.
pub async fn update_task(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(String, i64)>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ProxyError> {
    let url = task_url(&state.config.task_store_url, &user_id, task_id);
    forward_json(&state, reqwest::Method::PUT, &url, Some(body)).await
}

/// `DELETE /api/{user_id}/tasks/{task_id}` — delete; the store's 404 for an
/// already-deleted id passes through untouched.
pub async fn delete_task(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(String, i64)>,
) -> Result<Response, ProxyError> {
    let url = task_url(&state.config.task_store_url, &user_id, task_id);
    forward_json(&state, reqwest::Method::DELETE, &url, None).await
}

/// `POST /api/chat` — forward to the assistant service.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ProxyError> {
    let url = chat_url(&state.config.chat_service_url);
    forward_json(&state, reqwest::Method::POST, &url, Some(body)).await
}

/// `/api/auth/*` — forward any method to the session provider, passing the
/// session cookie upstream and `Set-Cookie` headers back down.
pub async fn auth(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let url = auth_url(&state.config.auth_service_url, &path_and_query);

    let method = req.method().clone();
    let cookie = req.headers().get(header::COOKIE).cloned();
    let content_type = req.headers().get(header::CONTENT_TYPE).cloned();
    let body = axum::body::to_bytes(req.into_body(), MAX_FORWARD_BODY_BYTES)
        .await
        .map_err(|_| ProxyError::BodyRead)?;

    let mut request = state.http.request(method, &url);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    if !body.is_empty() {
        request = request.body(body);
    }
    let upstream = request.send().await?;

    let mut builder = Response::builder().status(upstream.status());
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        builder = builder.header(header::CONTENT_TYPE, content_type.clone());
    }
    for set_cookie in upstream.headers().get_all(header::SET_COOKIE) {
        builder = builder.header(header::SET_COOKIE, set_cookie.clone());
    }
    let bytes = upstream.bytes().await?;
    builder.body(Body::from(bytes)).map_err(|_| ProxyError::Relay)
}
