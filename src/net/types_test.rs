use super::*;

fn seeker() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: None,
        role: Role::JobSeeker,
        profile_completion: 40,
        resume_uploaded: false,
        is_onboarded: Some(true),
        is_email_verified: Some(true),
        employer: None,
        preferences: None,
        saved_jobs: vec!["j-1".to_owned()],
        following_companies: vec![],
    }
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_success_with_data_yields_ok() {
    let env: ApiEnvelope<i32> =
        serde_json::from_str(r#"{"success":true,"data":7}"#).expect("envelope");
    assert_eq!(env.into_result("fallback"), Ok(7));
}

#[test]
fn envelope_failure_prefers_backend_message() {
    let env: ApiEnvelope<i32> =
        serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#)
            .expect("envelope");
    assert_eq!(env.into_result("fallback"), Err("Invalid credentials".to_owned()));
}

#[test]
fn envelope_failure_without_message_uses_fallback() {
    let env: ApiEnvelope<i32> =
        serde_json::from_str(r#"{"success":false}"#).expect("envelope");
    assert_eq!(env.into_result("login failed"), Err("login failed".to_owned()));
}

#[test]
fn envelope_success_without_data_is_error() {
    let env: ApiEnvelope<i32> =
        serde_json::from_str(r#"{"success":true}"#).expect("envelope");
    assert!(env.into_result("empty").is_err());
}

// =============================================================
// Role + user serde
// =============================================================

#[test]
fn role_uses_snake_case_wire_names() {
    assert_eq!(serde_json::to_string(&Role::JobSeeker).expect("json"), r#""job_seeker""#);
    assert_eq!(serde_json::to_string(&Role::Employer).expect("json"), r#""employer""#);
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn user_deserializes_minimal_camel_case_payload() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-9","name":"Bob","email":"bob@example.com","avatar":null,
            "role":"employer","profileCompletion":80,"resumeUploaded":false,
            "employer":{"companyId":null}}"#,
    )
    .expect("user");
    assert_eq!(user.role, Role::Employer);
    assert_eq!(user.profile_completion, 80);
    let employer = user.employer.expect("employer info");
    assert!(employer.company_id.is_none());
    assert!(user.saved_jobs.is_empty());
}

#[test]
fn user_role_defaults_to_job_seeker_when_absent() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-2","name":"Cam","email":"cam@example.com","avatar":null}"#,
    )
    .expect("user");
    assert_eq!(user.role, Role::JobSeeker);
}

// =============================================================
// Patch merge
// =============================================================

#[test]
fn apply_patch_touches_only_set_fields() {
    let mut user = seeker();
    user.apply_patch(UserPatch {
        profile_completion: Some(55),
        resume_uploaded: Some(true),
        ..UserPatch::default()
    });
    assert_eq!(user.profile_completion, 55);
    assert!(user.resume_uploaded);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.saved_jobs, vec!["j-1".to_owned()]);
}

#[test]
fn apply_patch_last_write_wins() {
    let mut user = seeker();
    user.apply_patch(UserPatch { name: Some("A".to_owned()), ..UserPatch::default() });
    user.apply_patch(UserPatch { name: Some("B".to_owned()), ..UserPatch::default() });
    assert_eq!(user.name, "B");
}

#[test]
fn apply_patch_can_promote_role_and_attach_employer_info() {
    let mut user = seeker();
    user.apply_patch(UserPatch {
        role: Some(Role::Employer),
        employer: Some(EmployerInfo { company_id: Some("c-1".to_owned()) }),
        ..UserPatch::default()
    });
    assert_eq!(user.role, Role::Employer);
    assert_eq!(
        user.employer.expect("employer").company_id.as_deref(),
        Some("c-1")
    );
}
