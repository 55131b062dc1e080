use super::*;
use crate::net::types::Role;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: None,
        role: Role::JobSeeker,
        profile_completion: 10,
        resume_uploaded: false,
        is_onboarded: None,
        is_email_verified: None,
        employer: None,
        preferences: None,
        saved_jobs: vec![],
        following_companies: vec![],
    }
}

#[test]
fn snapshot_serializes_only_the_allow_list() {
    let snapshot = SessionSnapshot { user: Some(user()), authenticated: true };
    let value = serde_json::to_value(&snapshot).expect("json");
    let mut keys: Vec<&str> =
        value.as_object().expect("object").keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["authenticated", "user"]);
}

#[test]
fn snapshot_round_trips() {
    let snapshot = SessionSnapshot { user: Some(user()), authenticated: true };
    let raw = serde_json::to_string(&snapshot).expect("json");
    let back: SessionSnapshot = serde_json::from_str(&raw).expect("parse");
    assert_eq!(back, snapshot);
}

#[test]
fn valid_login_requires_flag_and_user() {
    assert!(SessionSnapshot { user: Some(user()), authenticated: true }.is_valid_login());
    assert!(!SessionSnapshot { user: Some(user()), authenticated: false }.is_valid_login());
    assert!(!SessionSnapshot { user: None, authenticated: true }.is_valid_login());
}
