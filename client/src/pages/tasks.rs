//! Task area: header, create form, filter bar, task list, chat widget.
//!
//! This is the authenticated side of the session gate: nothing here mounts
//! until the session fetch has resolved with a user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_widget::ChatWidget;
use crate::components::create_task_form::CreateTaskForm;
use crate::components::task_filter_bar::TaskFilterBar;
use crate::components::task_list::TaskList;
use crate::net::types::TaskFilter;
use crate::state::auth::AuthState;
use crate::util::session;

/// Task area page — redirects to `/login` when no session is present.
#[component]
pub fn TasksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    session::install_unauth_redirect(auth, navigate);

    let filter = RwSignal::new(TaskFilter::default());

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        let user_id = user.id.clone();
                        let display_name = user.display_name().to_owned();
                        view! {
                            <div class="tasks-page">
                                <header class="tasks-page__header">
                                    <h1>"My Todo List"</h1>
                                    <div class="tasks-page__session">
                                        <span class="tasks-page__user">{display_name}</span>
                                        <button
                                            type="button"
                                            class="btn tasks-page__sign-out"
                                            on:click=move |_| session::sign_out(auth)
                                        >
                                            "Sign Out"
                                        </button>
                                    </div>
                                </header>
                                <main class="tasks-page__main">
                                    <CreateTaskForm user_id=user_id.clone()/>
                                    <TaskFilterBar filter=filter/>
                                    <TaskList user_id=user_id.clone() filter=filter/>
                                </main>
                                <ChatWidget user_id=user_id/>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
