//! Search and priority filter controls for the task list.
//!
//! Edits write straight into the shared filter signal; the list controller's
//! fetcher tracks it and re-fetches with the matching query parameters.

use leptos::prelude::*;

use crate::net::types::{Priority, TaskFilter};

/// Filter bar: title substring search plus a priority dropdown.
#[component]
pub fn TaskFilterBar(filter: RwSignal<TaskFilter>) -> impl IntoView {
    let on_search = move |ev| {
        let title = event_target_value(&ev);
        filter.update(|f| f.title = title);
    };

    let on_priority = move |ev| {
        let selected = event_target_value(&ev);
        filter.update(|f| f.priority = selected.parse::<Priority>().ok());
    };

    view! {
        <div class="task-filter">
            <input
                class="task-filter__search"
                type="search"
                placeholder="Search tasks..."
                prop:value=move || filter.get().title
                on:input=on_search
            />
            <select class="task-filter__priority" on:change=on_priority>
                <option value="" selected=move || filter.get().priority.is_none()>
                    "All priorities"
                </option>
                {Priority::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <option
                                value=p.as_str()
                                selected=move || filter.get().priority == Some(p)
                            >
                                {p.as_str()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
