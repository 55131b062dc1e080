//! Durable session snapshot in browser localStorage.
//!
//! DESIGN
//! ======
//! Only `{user, authenticated}` survive a restart. Transient session fields
//! (`loading`, `error`, `generation`) are unrepresentable in the snapshot
//! type, so they can never leak into storage by accident.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::util::storage;

const SESSION_KEY: &str = "joblane_session";

/// The persisted subset of the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub authenticated: bool,
}

impl SessionSnapshot {
    /// True when the snapshot actually represents a logged-in user.
    pub fn is_valid_login(&self) -> bool {
        self.authenticated && self.user.is_some()
    }
}

/// Load the persisted snapshot, if one exists and still parses.
pub fn load() -> Option<SessionSnapshot> {
    storage::load_json(SESSION_KEY)
}

/// Persist the current `{user, authenticated}` pair.
pub fn save(user: Option<&User>, authenticated: bool) {
    let snapshot = SessionSnapshot { user: user.cloned(), authenticated };
    storage::save_json(SESSION_KEY, &snapshot);
}

/// Drop the persisted snapshot (logout / fatal auth failure).
pub fn clear() {
    storage::remove(SESSION_KEY);
}
