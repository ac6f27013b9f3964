//! One task row: completion toggle, priority selector, delete.
//!
//! DESIGN
//! ======
//! Each action is a thin command: disable the card, issue one HTTP call,
//! and on success publish `TasksChanged` so the controller re-fetches. The
//! card never edits the rendered task in place — a failed mutation leaves
//! the stale row on purpose, since the store was not changed.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;

use crate::net::types::{Priority, Task, TaskUpdate};
use crate::state::tasks::TasksChanged;

/// Update body that flips `completed`, re-sending the current title as a
/// safety net and leaving the stored priority untouched.
fn toggle_update(task: &Task) -> TaskUpdate {
    TaskUpdate {
        title: task.title.clone(),
        completed: !task.completed,
        priority: None,
    }
}

/// Update body that sets `priority`, keeping title and completed as-is.
fn priority_update(task: &Task, priority: Priority) -> TaskUpdate {
    TaskUpdate {
        title: task.title.clone(),
        completed: task.completed,
        priority: Some(priority),
    }
}

/// Badge modifier class for a priority.
fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "task-card__badge--low",
        Priority::Medium => "task-card__badge--medium",
        Priority::High => "task-card__badge--high",
    }
}

/// A single task row with toggle / priority / delete mutations.
#[component]
pub fn TaskCard(task: Task, user_id: String) -> impl IntoView {
    let changes = expect_context::<TasksChanged>();

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Shared mutation runner: guard double-submit, clear the prior error,
    // publish on success only.
    let run = move |fut: std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), String>>>>| {
        if busy.get() {
            return;
        }
        error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match fut.await {
                Ok(()) => changes.notify(),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fut, changes);
            busy.set(false);
        }
    };

    let on_toggle = {
        let task = task.clone();
        let user_id = user_id.clone();
        move |_| {
            let update = toggle_update(&task);
            let user_id = user_id.clone();
            let task_id = task.id;
            run(Box::pin(async move {
                crate::net::api::update_task(&user_id, task_id, &update)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }));
        }
    };

    let on_delete = {
        let user_id = user_id.clone();
        let task_id = task.id;
        move |_| {
            let user_id = user_id.clone();
            run(Box::pin(async move {
                crate::net::api::delete_task(&user_id, task_id)
                    .await
                    .map_err(|e| e.to_string())
            }));
        }
    };

    let priority_buttons = Priority::ALL
        .into_iter()
        .map(|p| {
            let task = task.clone();
            let user_id = user_id.clone();
            let selected = task.priority == p;
            let on_priority = move |_| {
                let update = priority_update(&task, p);
                let user_id = user_id.clone();
                let task_id = task.id;
                run(Box::pin(async move {
                    crate::net::api::update_task(&user_id, task_id, &update)
                        .await
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                }));
            };
            view! {
                <button
                    type="button"
                    class="task-card__priority"
                    class:task-card__priority--selected=selected
                    disabled=move || busy.get()
                    on:click=on_priority
                >
                    {p.as_str()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let completed = task.completed;
    let badge_class = format!("task-card__badge {}", priority_class(task.priority));
    let toggle_label = if completed { "Mark incomplete" } else { "Mark complete" };

    view! {
        <li class="task-card">
            <div class="task-card__row">
                <button
                    type="button"
                    class="task-card__toggle"
                    class:task-card__toggle--done=completed
                    aria-label=toggle_label
                    disabled=move || busy.get()
                    on:click=on_toggle
                >
                    {if completed { "✓" } else { "○" }}
                </button>
                <span class="task-card__title" class:task-card__title--done=completed>
                    {task.title.clone()}
                </span>
                <span class=badge_class>{task.priority.as_str()}</span>
                <button
                    type="button"
                    class="task-card__delete"
                    aria-label="Delete task"
                    disabled=move || busy.get()
                    on:click=on_delete
                >
                    "✕"
                </button>
            </div>
            <div class="task-card__priorities">{priority_buttons}</div>
            <Show when=move || error.get().is_some()>
                <p class="task-card__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </li>
    }
}
