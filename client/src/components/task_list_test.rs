use super::*;
use crate::net::types::Priority;

fn task(id: i64, title: &str) -> Task {
    Task {
        id,
        user_id: "user-1".to_owned(),
        title: title.to_owned(),
        completed: false,
        priority: Priority::Medium,
    }
}

// ============================================================================
// Fetch ticketing
// ============================================================================

#[test]
fn begin_fetch_enters_loading_and_clears_prior_error() {
    let state = RwSignal::new(LoadState::Failed("store unreachable".to_owned()));
    let latest = RwSignal::new(0u64);

    let ticket = begin_fetch(state, latest);

    assert_eq!(ticket, 1);
    assert_eq!(state.get_untracked(), LoadState::Loading);
}

#[test]
fn begin_fetch_issues_strictly_increasing_tickets() {
    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(0u64);

    let first = begin_fetch(state, latest);
    let second = begin_fetch(state, latest);
    let third = begin_fetch(state, latest);

    assert!(first < second && second < third);
    assert_eq!(latest.get_untracked(), third);
}

// ============================================================================
// Staleness suppression: only the latest requested fetch is ever applied
// ============================================================================

#[test]
fn latest_fetch_result_is_applied() {
    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(0u64);

    let ticket = begin_fetch(state, latest);
    apply_fetch(state, latest, ticket, Ok(vec![task(1, "water plants")]));

    assert_eq!(
        state.get_untracked(),
        LoadState::Loaded(vec![task(1, "water plants")])
    );
}

#[test]
fn superseded_fetch_resolving_late_is_discarded() {
    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(0u64);

    let first = begin_fetch(state, latest);
    let second = begin_fetch(state, latest);

    // The newer fetch lands first.
    apply_fetch(state, latest, second, Ok(vec![task(2, "fresh snapshot")]));
    // The older fetch resolves afterwards; its snapshot must never render.
    apply_fetch(state, latest, first, Ok(vec![task(1, "stale snapshot")]));

    assert_eq!(
        state.get_untracked(),
        LoadState::Loaded(vec![task(2, "fresh snapshot")])
    );
}

#[test]
fn stale_failure_does_not_clobber_a_fresh_snapshot() {
    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(0u64);

    let first = begin_fetch(state, latest);
    let second = begin_fetch(state, latest);

    apply_fetch(state, latest, second, Ok(vec![task(2, "fresh snapshot")]));
    apply_fetch(
        state,
        latest,
        first,
        Err(ApiError::Network("connection reset".to_owned())),
    );

    assert_eq!(
        state.get_untracked(),
        LoadState::Loaded(vec![task(2, "fresh snapshot")])
    );
}

#[test]
fn result_arriving_after_a_newer_fetch_started_is_discarded() {
    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(0u64);

    let first = begin_fetch(state, latest);
    // A second fetch starts before the first resolves.
    let _second = begin_fetch(state, latest);

    apply_fetch(state, latest, first, Ok(vec![task(1, "stale snapshot")]));

    // Still waiting on the newer fetch; the stale result never rendered.
    assert_eq!(state.get_untracked(), LoadState::Loading);
}

// ============================================================================
// Failure path
// ============================================================================

#[test]
fn latest_fetch_failure_renders_the_error_and_no_task_data() {
    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(0u64);

    let ticket = begin_fetch(state, latest);
    apply_fetch(
        state,
        latest,
        ticket,
        Err(ApiError::Network("connection reset".to_owned())),
    );

    assert_eq!(
        state.get_untracked(),
        LoadState::Failed("network error: connection reset".to_owned())
    );
}
