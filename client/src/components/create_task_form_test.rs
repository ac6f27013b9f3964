use super::*;

#[test]
fn submission_title_trims_input() {
    assert_eq!(submission_title("  Buy milk "), Some("Buy milk".to_owned()));
}

#[test]
fn submission_title_rejects_whitespace_only_silently() {
    // No request and no error for blank input — the form stays unchanged.
    for input in ["", "   ", "\t"] {
        assert_eq!(submission_title(input), None);
    }
}
