//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the authenticated-user state machine; `persist` owns the
//! durable subset of it. Nothing else in the crate writes session state
//! directly.

pub mod persist;
pub mod session;
