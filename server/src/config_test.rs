use super::*;

// =============================================================================
// env_parse — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_reads_valid_value() {
    let key = "__TEST_TB_PORT_VALID__";
    unsafe { std::env::set_var(key, "8123") };
    assert_eq!(env_parse(key, DEFAULT_PORT), 8123);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__TEST_TB_PORT_GARBAGE__";
    unsafe { std::env::set_var(key, "not-a-port") };
    assert_eq!(env_parse(key, DEFAULT_PORT), DEFAULT_PORT);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_when_unset() {
    assert_eq!(env_parse("__TEST_TB_SURELY_UNSET_991__", DEFAULT_PORT), DEFAULT_PORT);
}

// =============================================================================
// normalize_base_url
// =============================================================================

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(
        normalize_base_url("http://store:8000///", DEFAULT_TASK_STORE_URL),
        "http://store:8000"
    );
}

#[test]
fn normalize_base_url_keeps_clean_value() {
    assert_eq!(
        normalize_base_url("https://tasks.example.com", DEFAULT_TASK_STORE_URL),
        "https://tasks.example.com"
    );
}

#[test]
fn normalize_base_url_blank_falls_back_to_default() {
    for raw in ["", "   ", "/"] {
        assert_eq!(normalize_base_url(raw, DEFAULT_TASK_STORE_URL), DEFAULT_TASK_STORE_URL);
    }
}
