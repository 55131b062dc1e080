//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `tokens` owns bearer-token storage and the
//! OAuth redirect, and `types` defines the shared wire schema.

pub mod api;
pub mod tokens;
pub mod types;
