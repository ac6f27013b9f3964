use super::*;

fn sample_task() -> Task {
    Task {
        id: 7,
        user_id: "u1".to_owned(),
        title: "Buy milk".to_owned(),
        completed: false,
        priority: Priority::Medium,
    }
}

// =============================================================
// toggle_update
// =============================================================

#[test]
fn toggle_update_flips_completed_and_keeps_title() {
    let update = toggle_update(&sample_task());
    assert_eq!(update.title, "Buy milk");
    assert!(update.completed);
    assert_eq!(update.priority, None);
}

#[test]
fn double_toggle_returns_to_original_value() {
    let mut task = sample_task();
    let first = toggle_update(&task);
    task.completed = first.completed;
    let second = toggle_update(&task);
    assert_eq!(second.completed, sample_task().completed);
}

#[test]
fn toggle_update_omits_priority_from_wire_body() {
    // The store must leave the stored priority unchanged on a plain toggle.
    let json = serde_json::to_string(&toggle_update(&sample_task())).unwrap();
    assert!(!json.contains("priority"), "unexpected priority in {json}");
}

// =============================================================
// priority_update
// =============================================================

#[test]
fn priority_update_sets_only_priority() {
    let update = priority_update(&sample_task(), Priority::High);
    assert_eq!(update.title, "Buy milk");
    assert!(!update.completed);
    assert_eq!(update.priority, Some(Priority::High));
}

// =============================================================
// priority_class
// =============================================================

#[test]
fn priority_class_is_distinct_per_variant() {
    let classes: Vec<&str> = Priority::ALL.into_iter().map(priority_class).collect();
    assert_eq!(classes.len(), 3);
    for (i, a) in classes.iter().enumerate() {
        for b in classes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
