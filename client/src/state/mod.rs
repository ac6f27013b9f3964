//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `tasks`, `chat`) so individual
//! components can depend on small focused models. Each is provided once
//! from the app root and owned exclusively by its consuming component tree.

pub mod auth;
pub mod chat;
pub mod tasks;
