//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, tasks::TasksPage};
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::tasks::TasksChanged;
use crate::util::session::init_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the session once on load,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts shared by all child components. The chat
    // transcript lives here so it survives route changes but resets with
    // the browser session.
    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ChatState::default());
    let changes = TasksChanged::new();

    provide_context(auth);
    provide_context(chat);
    provide_context(changes);

    init_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/taskboard.css"/>
        <Title text="Taskboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=TasksPage/>
            </Routes>
        </Router>
    }
}
