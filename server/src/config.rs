//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TASK_STORE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHAT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:3001";

/// Upstream locations and the listen port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Task store base URL (no trailing slash).
    pub task_store_url: String,
    /// Chat/assistant service base URL (no trailing slash).
    pub chat_service_url: String,
    /// Session provider base URL (no trailing slash).
    pub auth_service_url: String,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to local
    /// development defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            task_store_url: env_base_url("TASK_STORE_URL", DEFAULT_TASK_STORE_URL),
            chat_service_url: env_base_url("CHAT_SERVICE_URL", DEFAULT_CHAT_SERVICE_URL),
            auth_service_url: env_base_url("AUTH_SERVICE_URL", DEFAULT_AUTH_SERVICE_URL),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Base URLs are stored without a trailing slash so path joins stay simple.
fn env_base_url(key: &str, default: &str) -> String {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_owned());
    normalize_base_url(&raw, default)
}

fn normalize_base_url(raw: &str, default: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        default.trim_end_matches('/').to_owned()
    } else {
        trimmed.to_owned()
    }
}
