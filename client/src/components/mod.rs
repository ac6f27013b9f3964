//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth and task surfaces while reading/writing shared
//! state from Leptos context providers. Mutation widgets never edit the task
//! list directly; they publish on `TasksChanged` and let the list controller
//! re-fetch.

pub mod auth_form;
pub mod chat_widget;
pub mod create_task_form;
pub mod task_card;
pub mod task_filter_bar;
pub mod task_list;
