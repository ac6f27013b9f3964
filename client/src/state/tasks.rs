//! Task-list change channel shared by mutation widgets and the controller.
//!
//! DESIGN
//! ======
//! Mutation widgets and the assistant bridge never touch the displayed list
//! directly. After a successful network call they publish on this channel;
//! the list controller's fetcher subscribes and re-fetches the full snapshot
//! from the store. This is the only re-fetch trigger, so every rendered list
//! is a store snapshot rather than a locally mutated copy.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

/// Publish/subscribe handle for "the task list changed server-side".
///
/// Provided once from the app root via context. `notify` bumps a generation
/// counter; any fetcher that called `track` re-runs. Because the controller
/// is a Leptos resource, only the latest requested fetch is ever applied —
/// a superseded in-flight fetch is discarded, never rendered.
#[derive(Clone, Copy)]
pub struct TasksChanged(RwSignal<u64>);

impl TasksChanged {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    /// Publish a change; every subscribed fetcher re-runs.
    pub fn notify(&self) {
        self.0.update(|generation| *generation = generation.wrapping_add(1));
    }

    /// Subscribe the current reactive observer to future changes.
    pub fn track(&self) {
        self.0.track();
    }

    /// Current generation; test hook and debugging aid.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.0.get_untracked()
    }
}

impl Default for TasksChanged {
    fn default() -> Self {
        Self::new()
    }
}
