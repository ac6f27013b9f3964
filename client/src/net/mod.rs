//! Networking modules for the REST task store and auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` defines the failure taxonomy, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
