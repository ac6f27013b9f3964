//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session gating, redirects)
//! and delegates rendering details to `components`.

pub mod login;
pub mod tasks;
