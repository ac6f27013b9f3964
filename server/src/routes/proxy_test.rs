use super::*;

const BASE: &str = "http://store:8000";

// =============================================================
// Upstream URL construction
// =============================================================

#[test]
fn tasks_url_without_query() {
    assert_eq!(tasks_url(BASE, "u1", None), "http://store:8000/api/u1/tasks");
}

#[test]
fn tasks_url_ignores_empty_query() {
    assert_eq!(tasks_url(BASE, "u1", Some("")), "http://store:8000/api/u1/tasks");
}

#[test]
fn tasks_url_passes_search_and_filter_through() {
    assert_eq!(
        tasks_url(BASE, "u1", Some("title=milk&priority=High")),
        "http://store:8000/api/u1/tasks?title=milk&priority=High"
    );
}

#[test]
fn task_url_addresses_one_task() {
    assert_eq!(task_url(BASE, "u1", 42), "http://store:8000/api/u1/tasks/42");
}

#[test]
fn user_id_with_reserved_characters_is_re_encoded() {
    // Axum delivers the segment percent-decoded; a literal slash or space
    // must not change the upstream path shape.
    assert_eq!(
        tasks_url(BASE, "u1/evil", None),
        "http://store:8000/api/u1%2Fevil/tasks"
    );
    assert_eq!(
        task_url(BASE, "user one", 42),
        "http://store:8000/api/user%20one/tasks/42"
    );
    assert_eq!(
        tasks_url(BASE, "100%legit", None),
        "http://store:8000/api/100%25legit/tasks"
    );
}

#[test]
fn chat_url_appends_fixed_path() {
    assert_eq!(chat_url("http://assistant:9000"), "http://assistant:9000/api/chat");
}

#[test]
fn auth_url_keeps_path_and_query_verbatim() {
    assert_eq!(
        auth_url("http://auth:3001", "/api/auth/sign-in/email"),
        "http://auth:3001/api/auth/sign-in/email"
    );
    assert_eq!(
        auth_url("http://auth:3001", "/api/auth/get-session?x=1"),
        "http://auth:3001/api/auth/get-session?x=1"
    );
}

// =============================================================
// ProxyError response shape
// =============================================================

#[test]
fn proxy_error_maps_to_bad_gateway() {
    let response = ProxyError::BodyRead.into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn proxy_error_display_is_stable() {
    assert_eq!(ProxyError::BodyRead.to_string(), "request body unreadable");
    assert_eq!(ProxyError::Relay.to_string(), "upstream response could not be relayed");
}
