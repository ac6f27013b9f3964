//! Shared UI helpers.

pub mod session;
