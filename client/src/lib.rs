//! # client
//!
//! Leptos + WASM frontend for the Taskboard task-tracking application.
//! Renders the auth screens, the task list, and the assistant chat widget;
//! all business logic lives in remote HTTP services reached through the
//! `/api` proxy on the host server.
//!
//! This crate contains pages, components, application state, and the REST
//! task-store client. The `hydrate` feature builds the browser bundle; the
//! `ssr` feature builds the server-rendering half consumed by `server`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
