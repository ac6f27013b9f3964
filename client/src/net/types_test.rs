use super::*;

// =============================================================
// Priority wire format
// =============================================================

#[test]
fn priority_serializes_as_capitalized_string() {
    assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"Low\"");
    assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"Medium\"");
    assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
}

#[test]
fn priority_default_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn priority_parses_from_its_wire_string() {
    for p in Priority::ALL {
        assert_eq!(p.as_str().parse::<Priority>(), Ok(p));
    }
    assert_eq!("medium".parse::<Priority>(), Err(ParsePriorityError));
    assert_eq!("".parse::<Priority>(), Err(ParsePriorityError));
}

// =============================================================
// Task
// =============================================================

#[test]
fn task_deserializes_from_store_shape() {
    let json = r#"{"id":7,"user_id":"u1","title":"Buy milk","completed":false,"priority":"Medium"}"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.id, 7);
    assert_eq!(task.user_id, "u1");
    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);
    assert_eq!(task.priority, Priority::Medium);
}

// =============================================================
// TaskUpdate — omitted priority means "unchanged"
// =============================================================

#[test]
fn task_update_omits_priority_when_none() {
    let update = TaskUpdate {
        title: "Buy milk".to_owned(),
        completed: true,
        priority: None,
    };
    let json = serde_json::to_string(&update).unwrap();
    assert_eq!(json, r#"{"title":"Buy milk","completed":true}"#);
}

#[test]
fn task_update_sends_priority_when_set() {
    let update = TaskUpdate {
        title: "Buy milk".to_owned(),
        completed: false,
        priority: Some(Priority::High),
    };
    let json = serde_json::to_string(&update).unwrap();
    assert_eq!(json, r#"{"title":"Buy milk","completed":false,"priority":"High"}"#);
}

// =============================================================
// TaskFilter
// =============================================================

#[test]
fn task_filter_default_is_empty() {
    assert!(TaskFilter::default().is_empty());
}

#[test]
fn task_filter_with_whitespace_title_is_empty() {
    let filter = TaskFilter { title: "   ".to_owned(), priority: None };
    assert!(filter.is_empty());
}

#[test]
fn task_filter_with_priority_is_not_empty() {
    let filter = TaskFilter { title: String::new(), priority: Some(Priority::Low) };
    assert!(!filter.is_empty());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_display_name_prefers_name_over_email() {
    let user = User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        name: Some("Ada".to_owned()),
    };
    assert_eq!(user.display_name(), "Ada");
}

#[test]
fn user_display_name_falls_back_to_email() {
    for name in [None, Some(String::new()), Some("   ".to_owned())] {
        let user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name };
        assert_eq!(user.display_name(), "a@b.com");
    }
}

#[test]
fn user_deserializes_without_name() {
    let user: User = serde_json::from_str(r#"{"id":"u1","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.name, None);
}
