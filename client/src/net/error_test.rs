use super::*;

#[test]
fn from_status_maps_404_to_not_found() {
    assert_eq!(ApiError::from_status(404, r#"{"detail":"Task not found"}"#), ApiError::NotFound);
}

#[test]
fn from_status_uses_detail_body_when_present() {
    let err = ApiError::from_status(400, r#"{"detail":"Title required (1-200 chars)"}"#);
    assert_eq!(
        err,
        ApiError::Server { status: 400, message: "Title required (1-200 chars)".to_owned() }
    );
    assert_eq!(err.to_string(), "Title required (1-200 chars)");
}

#[test]
fn from_status_falls_back_to_status_line_on_opaque_body() {
    for body in ["", "<html>oops</html>", r#"{"detail":"   "}"#] {
        let err = ApiError::from_status(500, body);
        assert_eq!(
            err,
            ApiError::Server { status: 500, message: "request failed with status 500".to_owned() }
        );
    }
}

#[test]
fn not_found_display_is_human_readable() {
    assert_eq!(ApiError::NotFound.to_string(), "task not found");
}

#[test]
fn validation_display_is_the_message_itself() {
    let err = ApiError::Validation("Title is required".to_owned());
    assert_eq!(err.to_string(), "Title is required");
}

#[test]
fn network_display_includes_cause() {
    let err = ApiError::Network("fetch aborted".to_owned());
    assert_eq!(err.to_string(), "network error: fetch aborted");
}
