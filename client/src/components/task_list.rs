//! Task list controller: owns the fetch lifecycle for a user's tasks.
//!
//! DESIGN
//! ======
//! The list is an explicit state machine, `Loading -> Loaded | Failed`,
//! re-entering `Loading` whenever the `TasksChanged` channel publishes or
//! the filter changes. Every fetch takes a numbered ticket; a finished
//! fetch is applied only while its ticket is still the latest, so a
//! superseded in-flight result is discarded rather than rendered out of
//! order. There is no optimistic mutation: every rendered list is a full
//! store snapshot, in store order.

#[cfg(test)]
#[path = "task_list_test.rs"]
mod task_list_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Task, TaskFilter};
use crate::state::tasks::TasksChanged;

use super::task_card::TaskCard;

/// Where the controller is in its fetch lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Task>),
    Failed(String),
}

/// Enter `Loading`, clearing any prior error or snapshot, and issue the
/// next fetch ticket.
fn begin_fetch(state: RwSignal<LoadState>, latest: RwSignal<u64>) -> u64 {
    state.set(LoadState::Loading);
    let ticket = latest.get_untracked() + 1;
    latest.set(ticket);
    ticket
}

/// Apply a finished fetch unless a newer one has been issued since.
fn apply_fetch(
    state: RwSignal<LoadState>,
    latest: RwSignal<u64>,
    ticket: u64,
    result: Result<Vec<Task>, ApiError>,
) {
    if latest.get_untracked() != ticket {
        return;
    }
    state.set(match result {
        Ok(tasks) => LoadState::Loaded(tasks),
        Err(e) => LoadState::Failed(e.to_string()),
    });
}

/// The authoritative task list for `user_id`, filtered by `filter`.
#[component]
pub fn TaskList(user_id: String, filter: RwSignal<TaskFilter>) -> impl IntoView {
    let changes = expect_context::<TasksChanged>();

    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(0u64);

    let fetch_user = StoredValue::new(user_id.clone());
    Effect::new(move |_| {
        changes.track();
        let filter = filter.get();
        let ticket = begin_fetch(state, latest);

        #[cfg(feature = "hydrate")]
        {
            let user_id = fetch_user.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_tasks(&user_id, &filter).await;
                apply_fetch(state, latest, ticket, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (filter, ticket, fetch_user);
        }
    });

    let card_user = user_id;

    view! {
        <div class="task-list">
            {move || {
                let card_user = card_user.clone();
                match state.get() {
                    LoadState::Loading => {
                        view! { <p class="task-list__loading">"Loading tasks..."</p> }.into_any()
                    }
                    LoadState::Failed(message) => {
                        view! {
                            <p class="task-list__error" role="alert">{message}</p>
                        }
                            .into_any()
                    }
                    LoadState::Loaded(list) if list.is_empty() => {
                        view! {
                            <p class="task-list__empty">"No tasks yet. Add one above."</p>
                        }
                            .into_any()
                    }
                    LoadState::Loaded(list) => {
                        view! {
                            <ul class="task-list__items">
                                {list
                                    .into_iter()
                                    .map(|task| {
                                        view! {
                                            <TaskCard task=task user_id=card_user.clone()/>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
