//! Create-task widget: one input, one mutation, one `TasksChanged` publish.

#[cfg(test)]
#[path = "create_task_form_test.rs"]
mod create_task_form_test;

use leptos::prelude::*;

use crate::net::api::TITLE_MAX_CHARS;
use crate::state::tasks::TasksChanged;

/// Title to submit, if any. Whitespace-only input submits nothing: no
/// request is sent and no error is shown, the form just stays as it is.
fn submission_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Form for creating a new task under `user_id`.
#[component]
pub fn CreateTaskForm(user_id: String) -> impl IntoView {
    let changes = expect_context::<TasksChanged>();

    let title = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let can_submit = move || !busy.get() && !title.get().trim().is_empty();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(new_title) = submission_title(&title.get()) else {
            return;
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let user_id = user_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_task(&user_id, &new_title).await {
                    Ok(_) => {
                        title.set(String::new());
                        changes.notify();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&user_id, new_title, changes);
            busy.set(false);
        }
    };

    view! {
        <form class="create-task" on:submit=on_submit>
            <div class="create-task__row">
                <input
                    class="create-task__input"
                    type="text"
                    placeholder="New task..."
                    maxlength=TITLE_MAX_CHARS.to_string()
                    disabled=move || busy.get()
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                    "Add"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="create-task__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </form>
    }
}
