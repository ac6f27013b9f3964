//! Failure taxonomy for task-store calls.
//!
//! ERROR HANDLING
//! ==============
//! Every store call resolves to exactly one of these variants. Validation
//! failures are caught before any request leaves the browser; transport and
//! server failures are surfaced verbatim next to the control that triggered
//! them and are never retried here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A single failed task-store operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Input rejected locally; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// Transport-level failure (connection refused, DNS, aborted fetch).
    #[error("network error: {0}")]
    Network(String),
    /// The store answered 404 for the addressed task.
    #[error("task not found")]
    NotFound,
    /// Any other non-2xx response; `message` carries the store's `detail`
    /// body when one was decodable, otherwise a generic status line.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Build a `Server`/`NotFound` error from a response status and raw body.
    ///
    /// The store reports failures as `{"detail": "..."}`; fall back to a
    /// plain status line when the body has some other shape.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> ApiError {
        if status == 404 {
            return ApiError::NotFound;
        }
        ApiError::Server { status, message: server_message(status, body) }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

fn server_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.detail.trim().is_empty() => parsed.detail,
        _ => format!("request failed with status {status}"),
    }
}
