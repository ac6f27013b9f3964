//! Shared wire-protocol DTOs for the task store and auth provider.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the store's JSON payloads so serde
//! round-trips stay lossless: a `Task` deserialized from a list response
//! serializes back to the exact shape the store emits.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Task priority as stored and rendered.
///
/// The store serializes priorities as capitalized strings (`"Low"`,
/// `"Medium"`, `"High"`); serde's default variant naming matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    /// Store-side default for newly created tasks.
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities in ascending order, for selector rows.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

}

/// Failure to parse a [`Priority`] from its wire string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority")]
pub struct ParsePriorityError;

impl std::str::FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Priority, ParsePriorityError> {
        match value {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            _ => Err(ParsePriorityError),
        }
    }
}

/// One user-owned to-do item, exactly as the store returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned numeric identifier, immutable after creation.
    pub id: i64,
    /// Owning user's identifier (opaque string).
    pub user_id: String,
    /// Free-text title, 1-200 characters after trimming.
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
}

/// Body for `PUT /api/{user_id}/tasks/{task_id}`.
///
/// `title` and `completed` are always sent (full replace); `priority` is a
/// tagged option — `None` is omitted from the JSON body and means "leave the
/// stored priority unchanged".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Optional list-endpoint query parameters: title substring search and
/// exact priority filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub title: String,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// True when the filter restricts nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.priority.is_none()
    }
}

/// The authenticated user as reported by the session provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name to show in the header: display name when set, email otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}
