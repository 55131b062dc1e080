use super::*;
use crate::net::types::{EmployerInfo, Role};

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: None,
        role,
        profile_completion: 30,
        resume_uploaded: false,
        is_onboarded: Some(true),
        is_email_verified: Some(true),
        employer: None,
        preferences: None,
        saved_jobs: vec![],
        following_companies: vec![],
    }
}

fn assert_invariant(state: &SessionState) {
    assert_eq!(state.authenticated, state.user.is_some());
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

// =============================================================
// Login / logout commits (P1)
// =============================================================

#[test]
fn commit_login_sets_user_and_flag() {
    let mut state = SessionState::default();
    let alice = user(Role::JobSeeker);
    state.commit_login(alice.clone());
    assert!(state.authenticated);
    assert_eq!(state.user, Some(alice));
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_invariant(&state);
}

#[test]
fn clear_drops_user_and_flag() {
    let mut state = SessionState::default();
    state.commit_login(user(Role::JobSeeker));
    state.clear();
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert_invariant(&state);
}

#[test]
fn commit_login_clears_previous_error() {
    let mut state = SessionState::default();
    state.fail("Invalid credentials".to_owned());
    state.commit_login(user(Role::JobSeeker));
    assert!(state.error.is_none());
}

// =============================================================
// Credential failure (P5 core transition)
// =============================================================

#[test]
fn fail_sets_message_and_stays_unauthenticated() {
    let mut state = SessionState::default();
    state.begin_loading();
    state.fail("Invalid credentials".to_owned());
    assert!(!state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert_invariant(&state);
}

#[test]
fn begin_loading_clears_stale_error() {
    let mut state = SessionState::default();
    state.fail("old".to_owned());
    state.begin_loading();
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Generation counter (stale-async defense)
// =============================================================

#[test]
fn generation_bumps_on_identity_changes_only() {
    let mut state = SessionState::default();
    let g0 = state.generation;
    state.begin_loading();
    state.fail("nope".to_owned());
    assert_eq!(state.generation, g0);
    state.commit_login(user(Role::JobSeeker));
    assert_eq!(state.generation, g0 + 1);
    state.clear();
    assert_eq!(state.generation, g0 + 2);
}

#[test]
fn stale_fetch_after_logout_is_dropped() {
    let mut state = SessionState::default();
    state.commit_login(user(Role::JobSeeker));

    // A profile fetch starts, capturing the generation…
    let started = state.generation;
    assert!(state.is_current(started));

    // …then the user logs out while it is in flight.
    state.clear();

    // The stale resolution must observe a moved generation and no-op,
    // leaving the session unauthenticated.
    assert!(!state.is_current(started));
    if state.is_current(started) {
        state.commit_login(user(Role::JobSeeker));
    }
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

// =============================================================
// Startup snapshot adoption
// =============================================================

#[test]
fn snapshot_without_stored_token_is_stale() {
    let snapshot =
        persist::SessionSnapshot { user: Some(user(Role::JobSeeker)), authenticated: true };
    assert!(snapshot_adoptable(&snapshot, true));
    // Browser cleared the token keys but kept the session key: the snapshot
    // must not be adopted, or every authenticated call would 401.
    assert!(!snapshot_adoptable(&snapshot, false));
}

#[test]
fn logged_out_snapshot_is_never_adoptable() {
    let snapshot = persist::SessionSnapshot { user: None, authenticated: false };
    assert!(!snapshot_adoptable(&snapshot, true));
    let half = persist::SessionSnapshot { user: Some(user(Role::JobSeeker)), authenticated: false };
    assert!(!snapshot_adoptable(&half, true));
}

// =============================================================
// Merge + patch
// =============================================================

#[test]
fn merge_user_replaces_only_when_authenticated() {
    let mut state = SessionState::default();
    state.merge_user(user(Role::JobSeeker));
    assert!(state.user.is_none());

    state.commit_login(user(Role::JobSeeker));
    let mut refreshed = user(Role::JobSeeker);
    refreshed.profile_completion = 90;
    state.merge_user(refreshed);
    assert_eq!(state.user.as_ref().expect("user").profile_completion, 90);
    assert_invariant(&state);
}

#[test]
fn patch_user_shallow_merges_in_place() {
    let mut state = SessionState::default();
    state.commit_login(user(Role::JobSeeker));
    state.patch_user(UserPatch {
        role: Some(Role::Employer),
        employer: Some(EmployerInfo { company_id: None }),
        ..UserPatch::default()
    });
    let current = state.user.as_ref().expect("user");
    assert_eq!(current.role, Role::Employer);
    assert_eq!(current.name, "Alice");
    assert_eq!(state.role(), Some(Role::Employer));
}
