//! Session store: single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in an `RwSignal<SessionState>` provided via context from
//! the root `App`. Route guards and user-aware components read it; pages call
//! the action functions below to mutate it.
//!
//! DESIGN
//! ======
//! State transitions are pure methods on [`SessionState`] so they can be unit
//! tested in isolation; network side effects stay in the async action
//! functions, which call `net::api` and then apply a transition. Every async
//! action captures `generation` when it starts and drops its result if the
//! counter moved while the request was in flight — a logout that races an
//! in-flight profile fetch always wins.
//!
//! ERROR HANDLING
//! ==============
//! Actions never panic and never propagate errors to views. Credential
//! flows report failure as `false` plus a message in `error`; refresh and
//! remote-logout failures are logged and otherwise ignored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Role, User, UserPatch};
use crate::net::{api, tokens};
use crate::state::persist;

/// Authentication state for the current browser user.
///
/// Invariant: `authenticated` is true iff `user` is present. `loading` and a
/// settled outcome are mutually exclusive. `generation` increases on every
/// identity change (login commit, clear) and never decreases.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
}

impl Default for SessionState {
    /// The session starts loading: hydration has not yet decided whether a
    /// persisted login exists, and the in-page guard must not redirect until
    /// it has.
    fn default() -> Self {
        Self { user: None, authenticated: false, loading: true, error: None, generation: 0 }
    }
}

impl SessionState {
    /// Commit a logged-in user. Clears any error, settles loading, and bumps
    /// the generation so stale in-flight results are dropped.
    pub fn commit_login(&mut self, user: User) {
        self.user = Some(user);
        self.authenticated = true;
        self.loading = false;
        self.error = None;
        self.generation += 1;
    }

    /// Clear to the unauthenticated state (logout or fatal auth failure).
    pub fn clear(&mut self) {
        self.user = None;
        self.authenticated = false;
        self.loading = false;
        self.error = None;
        self.generation += 1;
    }

    /// Enter the loading state for a credential flow.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed credential flow: unauthenticated with a message.
    pub fn fail(&mut self, message: String) {
        self.user = None;
        self.authenticated = false;
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace the user with a freshly fetched authoritative copy, keeping
    /// auth flags. No-op when not authenticated.
    pub fn merge_user(&mut self, user: User) {
        if self.authenticated {
            self.user = Some(user);
        }
    }

    /// Shallow-merge a local patch over the current user (optimistic UI).
    pub fn patch_user(&mut self, patch: UserPatch) {
        if let Some(user) = &mut self.user {
            user.apply_patch(patch);
        }
    }

    /// Whether an async action started at `generation` may still apply its
    /// result.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Convenience: the current user's role, if logged in.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// The shared session signal; provided via context from `App`.
pub type Session = RwSignal<SessionState>;

/// Read the session signal out of context. Panics only if `App` did not
/// provide it, which is a programming error.
pub fn use_session() -> Session {
    expect_context::<Session>()
}

fn persist_current(session: Session) {
    session.with_untracked(|s| persist::save(s.user.as_ref(), s.authenticated));
}

/// Commit an already-obtained user (completed API login or OAuth callback)
/// and persist the snapshot. No backend call.
pub fn login(session: Session, user: User) {
    session.update(|s| s.commit_login(user));
    persist_current(session);
}

/// Log out: clear tokens and local state first (fail-open), then tell the
/// backend best-effort. Local state is guaranteed cleared even if the remote
/// call fails.
pub async fn logout(session: Session) {
    tokens::clear_tokens();
    persist::clear();
    session.update(SessionState::clear);

    if let Err(e) = api::logout().await {
        leptos::logging::warn!("remote logout failed (ignored): {e}");
    }
}

/// Log in with email + password. Returns `true` on success; on any failure
/// leaves the session unauthenticated with `error` set and returns `false`.
pub async fn login_with_credentials(session: Session, email: &str, password: &str) -> bool {
    session.update(SessionState::begin_loading);
    let started = session.with_untracked(|s| s.generation);

    match api::login(email, password).await {
        Ok(user) => {
            if !session.with_untracked(|s| s.is_current(started)) {
                return false;
            }
            login(session, user);
            true
        }
        Err(message) => {
            if session.with_untracked(|s| s.is_current(started)) {
                session.update(|s| s.fail(message));
            }
            false
        }
    }
}

/// Register a new account. Same contract as [`login_with_credentials`];
/// `role` defaults to job seeker at the call sites that do not offer a
/// choice.
pub async fn register(
    session: Session,
    email: &str,
    password: &str,
    name: &str,
    role: Role,
) -> bool {
    session.update(SessionState::begin_loading);
    let started = session.with_untracked(|s| s.generation);

    match api::register(email, password, name, role).await {
        Ok(user) => {
            if !session.with_untracked(|s| s.is_current(started)) {
                return false;
            }
            login(session, user);
            true
        }
        Err(message) => {
            if session.with_untracked(|s| s.is_current(started)) {
                session.update(|s| s.fail(message));
            }
            false
        }
    }
}

/// Kick off the Google OAuth redirect. The callback page completes the
/// session; this function does not.
pub fn login_with_google() {
    tokens::google_auth();
}

/// Fetch `/auth/me` with the stored token. Success commits the user; any
/// failure (network or auth) clears to the unauthenticated state.
pub async fn fetch_current_user(session: Session) {
    session.update(SessionState::begin_loading);
    let started = session.with_untracked(|s| s.generation);

    match api::fetch_current_user().await {
        Some(user) => {
            if session.with_untracked(|s| s.is_current(started)) {
                login(session, user);
            }
        }
        None => {
            if session.with_untracked(|s| s.is_current(started)) {
                persist::clear();
                session.update(SessionState::clear);
            }
        }
    }
}

/// Re-fetch the profile and merge over the existing user. Failure is logged
/// and otherwise ignored; the stale local copy remains.
pub async fn refresh_user(session: Session) {
    let started = session.with_untracked(|s| s.generation);

    match api::fetch_current_user().await {
        Some(user) => {
            if session.with_untracked(|s| s.is_current(started)) {
                session.update(|s| s.merge_user(user));
                persist_current(session);
            }
        }
        None => {
            leptos::logging::warn!("profile refresh failed; keeping cached user");
        }
    }
}

/// Synchronous local shallow merge, no network call (optimistic updates).
pub fn update_user(session: Session, patch: UserPatch) {
    session.update(|s| s.patch_user(patch));
    persist_current(session);
}

/// Whether a persisted snapshot may be adopted at startup. A snapshot with
/// no stored access token behind it is stale (the browser cleared the token
/// keys but kept the session key); adopting it would show a logged-in UI
/// whose every authenticated call fails.
fn snapshot_adoptable(snapshot: &persist::SessionSnapshot, has_access_token: bool) -> bool {
    snapshot.is_valid_login() && has_access_token
}

/// Initialize the session at app startup.
///
/// Order: repair token divergence, then adopt the persisted snapshot (and
/// refresh it in the background), else fall back to a `/auth/me` fetch when
/// only a token survived, else settle unauthenticated.
pub async fn hydrate(session: Session) {
    tokens::reconcile();
    let has_token = tokens::access_token().is_some();

    if let Some(snapshot) = persist::load() {
        if snapshot_adoptable(&snapshot, has_token) {
            if let Some(user) = snapshot.user {
                session.update(|s| s.commit_login(user));
                refresh_user(session).await;
                return;
            }
        } else {
            persist::clear();
        }
    }

    if has_token {
        fetch_current_user(session).await;
    } else {
        session.update(SessionState::clear);
    }
}
