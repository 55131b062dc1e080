use super::*;
use crate::net::types::EmployerInfo;
use std::collections::HashMap;

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: None,
        role,
        profile_completion: 0,
        resume_uploaded: false,
        is_onboarded: Some(true),
        is_email_verified: Some(true),
        employer: None,
        preferences: None,
        saved_jobs: vec![],
        following_companies: vec![],
    }
}

fn params_from(pairs: &[(&str, &str)]) -> CallbackParams {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    CallbackParams::from_query(|key| map.get(key).cloned())
}

// =============================================================
// Parameter parsing
// =============================================================

#[test]
fn from_query_reads_tokens_and_flags() {
    let params = params_from(&[
        ("accessToken", "tok_a"),
        ("refreshToken", "tok_b"),
        ("isNewUser", "true"),
    ]);
    assert_eq!(params.access_token.as_deref(), Some("tok_a"));
    assert_eq!(params.refresh_token.as_deref(), Some("tok_b"));
    assert!(params.is_new_user);
    assert!(!params.needs_role_selection);
}

#[test]
fn flags_require_the_literal_true() {
    assert!(!params_from(&[("isNewUser", "false")]).is_new_user);
    assert!(!params_from(&[("isNewUser", "1")]).is_new_user);
    assert!(!params_from(&[]).is_new_user);
}

#[test]
fn empty_token_values_count_as_absent() {
    let params = params_from(&[("accessToken", ""), ("refreshToken", "tok_b")]);
    assert!(params.access_token.is_none());
}

// =============================================================
// Parameter check transition
// =============================================================

#[test]
fn check_params_proceeds_with_both_tokens() {
    let params = params_from(&[("accessToken", "tok_a"), ("refreshToken", "tok_b")]);
    assert_eq!(
        check_params(&params),
        ParamCheck::Proceed { access: "tok_a".to_owned(), refresh: "tok_b".to_owned() }
    );
}

#[test]
fn check_params_fails_when_either_token_is_missing() {
    let only_access = params_from(&[("accessToken", "tok_a")]);
    let only_refresh = params_from(&[("refreshToken", "tok_b")]);
    for params in [only_access, only_refresh, CallbackParams::default()] {
        assert_eq!(
            check_params(&params),
            ParamCheck::Fail("invalid authentication response".to_owned())
        );
    }
}

#[test]
fn check_params_backend_error_wins_over_tokens() {
    let params = params_from(&[
        ("accessToken", "tok_a"),
        ("refreshToken", "tok_b"),
        ("error", "access denied"),
    ]);
    assert_eq!(check_params(&params), ParamCheck::Fail("access denied".to_owned()));
}

// =============================================================
// Destination resolution
// =============================================================

#[test]
fn role_selection_flag_wins_regardless_of_role() {
    let mut employer = user(Role::Employer);
    employer.employer = Some(EmployerInfo { company_id: Some("c-1".to_owned()) });
    assert_eq!(destination_for(&employer, false, true), "/auth/role");
    assert_eq!(destination_for(&user(Role::JobSeeker), true, true), "/auth/role");
}

#[test]
fn employer_without_company_goes_to_setup_not_dashboard() {
    // handleAuthCallback("tok_a","tok_b") then a fetch resolving to an
    // employer with no companyId must land on company setup.
    let mut employer = user(Role::Employer);
    employer.employer = Some(EmployerInfo { company_id: None });
    assert_eq!(destination_for(&employer, false, false), "/employer/company/setup");

    let bare = user(Role::Employer);
    assert_eq!(destination_for(&bare, false, false), "/employer/company/setup");
}

#[test]
fn employer_with_company_goes_to_dashboard() {
    let mut employer = user(Role::Employer);
    employer.employer = Some(EmployerInfo { company_id: Some("c-1".to_owned()) });
    assert_eq!(destination_for(&employer, false, false), "/employer");
}

#[test]
fn new_or_unonboarded_seeker_goes_to_onboarding() {
    assert_eq!(destination_for(&user(Role::JobSeeker), true, false), "/onboarding");

    let mut fresh = user(Role::JobSeeker);
    fresh.is_onboarded = Some(false);
    assert_eq!(destination_for(&fresh, false, false), "/onboarding");

    let mut unknown = user(Role::JobSeeker);
    unknown.is_onboarded = None;
    assert_eq!(destination_for(&unknown, false, false), "/onboarding");
}

#[test]
fn onboarded_seeker_goes_to_jobs_home() {
    assert_eq!(destination_for(&user(Role::JobSeeker), false, false), "/jobs");
}

// =============================================================
// User fetch transition (P6)
// =============================================================

#[test]
fn empty_user_fetch_is_terminal_error_never_authenticated_destination() {
    let params = params_from(&[("accessToken", "tok_a"), ("refreshToken", "tok_b")]);
    let phase = phase_after_user_fetch(&params, None);
    match phase {
        CallbackPhase::Error(message) => assert!(!message.is_empty()),
        other => panic!("expected error phase, got {other:?}"),
    }
}

#[test]
fn successful_fetch_reaches_ready_with_role_destination() {
    let params = params_from(&[("accessToken", "tok_a"), ("refreshToken", "tok_b")]);
    let seeker = user(Role::JobSeeker);
    let phase = phase_after_user_fetch(&params, Some(&seeker));
    assert_eq!(phase, CallbackPhase::Ready("/jobs"));
    assert_eq!(phase.redirect_target(), Some("/jobs"));
}

#[test]
fn role_selection_param_routes_fetch_result_to_role_page() {
    let params = params_from(&[
        ("accessToken", "tok_a"),
        ("refreshToken", "tok_b"),
        ("needsRoleSelection", "true"),
    ]);
    let mut employer = user(Role::Employer);
    employer.employer = Some(EmployerInfo { company_id: Some("c-1".to_owned()) });
    let phase = phase_after_user_fetch(&params, Some(&employer));
    assert_eq!(phase, CallbackPhase::NeedsRoleSelection);
    assert_eq!(phase.redirect_target(), Some("/auth/role"));
}

#[test]
fn companyless_employer_fetch_reaches_company_setup_phase() {
    let params = params_from(&[("accessToken", "tok_a"), ("refreshToken", "tok_b")]);
    let mut employer = user(Role::Employer);
    employer.employer = Some(EmployerInfo { company_id: None });
    let phase = phase_after_user_fetch(&params, Some(&employer));
    assert_eq!(phase, CallbackPhase::NeedsCompanySetup);
    assert_eq!(phase.redirect_target(), Some("/employer/company/setup"));
}

#[test]
fn non_terminal_and_error_phases_have_no_redirect_target() {
    assert_eq!(CallbackPhase::AwaitingTokens.redirect_target(), None);
    assert_eq!(CallbackPhase::FetchingUser.redirect_target(), None);
    assert_eq!(CallbackPhase::Error("x".to_owned()).redirect_target(), None);
}
