//! Route classification and the two authorization gates.
//!
//! DESIGN
//! ======
//! One static path table feeds both checks so they cannot drift:
//!
//! - the edge check runs server-side before any page code executes and sees
//!   only cookie presence (coarse reject-fast filter);
//! - the in-page check runs after hydration with the full session and
//!   redirects precisely by role.
//!
//! Both are advisory UI gates, not a security boundary: the backend API
//! independently enforces authorization on every request regardless of what
//! the client guard decided.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::session::{SessionState, use_session};

/// Public landing page; also the redirect target for unauthenticated access.
pub const HOME: &str = "/";
/// Job-seeker home surface.
pub const JOBS_HOME: &str = "/jobs";
/// Employer dashboard.
pub const EMPLOYER_HOME: &str = "/employer";
/// Company-setup flow for employers without a company record.
pub const COMPANY_SETUP: &str = "/employer/company/setup";
/// Post-OAuth role selection page.
pub const ROLE_SELECTION: &str = "/auth/role";
/// Job-seeker onboarding flow.
pub const ONBOARDING: &str = "/onboarding";

/// Prefixes the guards never touch: backend API, build artifacts, assets.
const EXEMPT_PREFIXES: &[&str] = &["/api", "/pkg", "/assets", "/favicon.ico"];

/// Paths reachable only by employers.
const EMPLOYER_PREFIXES: &[&str] = &["/employer"];

/// Paths that make sense only for job seekers.
const SEEKER_PREFIXES: &[&str] = &["/jobs", "/applications", "/saved", "/onboarding"];

/// Remaining authenticated-only paths, role-agnostic.
const PROTECTED_PREFIXES: &[&str] = &["/profile", "/settings", "/notifications", "/explore"];

/// What a path requires, derived from the static table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// No authentication required.
    Public,
    /// Authentication required, any role.
    Protected,
    /// Job-seeker surface; employers are redirected to their dashboard.
    SeekerScoped,
    /// Employer surface; other roles are redirected to the job list.
    EmployerScoped,
}

/// Segment-aware prefix match: `/jobs` covers `/jobs` and `/jobs/123`,
/// never `/jobsearch`.
fn has_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn matches_any(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| has_prefix(path, prefix))
}

/// Classify a request path against the shared table.
pub fn classify_path(path: &str) -> RouteClass {
    if matches_any(path, EXEMPT_PREFIXES) {
        return RouteClass::Public;
    }
    if matches_any(path, EMPLOYER_PREFIXES) {
        return RouteClass::EmployerScoped;
    }
    if matches_any(path, SEEKER_PREFIXES) {
        return RouteClass::SeekerScoped;
    }
    if matches_any(path, PROTECTED_PREFIXES) {
        return RouteClass::Protected;
    }
    RouteClass::Public
}

/// Edge-time check: with only cookie presence to go on, decide whether the
/// request may proceed. Returns the redirect target, or `None` to pass
/// through. Cannot see roles; precise redirects happen in-page.
pub fn edge_decision(path: &str, has_token_cookie: bool) -> Option<&'static str> {
    match classify_path(path) {
        RouteClass::Public => None,
        _ if has_token_cookie => None,
        _ => Some(HOME),
    }
}

/// In-page check: with the hydrated session, decide whether the current
/// path may render. Returns the redirect target, or `None` to allow.
///
/// Idempotent: a decision equal to the current path collapses to `None`,
/// so repeated evaluation with unchanged inputs never navigates again.
pub fn page_decision(path: &str, session: &SessionState) -> Option<String> {
    // No verdict until hydration settles; redirecting early would bounce
    // users with a valid persisted session.
    if session.loading {
        return None;
    }

    let class = classify_path(path);
    if class == RouteClass::Public {
        return None;
    }
    if !session.authenticated {
        return redirect_unless_already_there(path, HOME);
    }

    let role = session.role().unwrap_or_default();
    let target = match class {
        RouteClass::EmployerScoped if role != Role::Employer => JOBS_HOME.to_owned(),
        RouteClass::EmployerScoped if employer_needs_company_setup(session) => {
            COMPANY_SETUP.to_owned()
        }
        RouteClass::SeekerScoped if role == Role::Employer => {
            if employer_needs_company_setup(session) {
                COMPANY_SETUP.to_owned()
            } else {
                EMPLOYER_HOME.to_owned()
            }
        }
        _ => return None,
    };
    redirect_unless_already_there(path, &target)
}

fn redirect_unless_already_there(path: &str, target: &str) -> Option<String> {
    if path == target { None } else { Some(target.to_owned()) }
}

/// True for an authenticated employer with no company record yet.
fn employer_needs_company_setup(session: &SessionState) -> bool {
    session
        .user
        .as_ref()
        .is_some_and(|u| {
            u.role == Role::Employer
                && u.employer.as_ref().is_none_or(|e| e.company_id.is_none())
        })
}

/// Install the in-page guard: re-evaluates whenever the session or path
/// changes and navigates when a redirect is due.
pub fn install_route_guard() {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = location.pathname.get();
        let decision = session.with(|s| page_decision(&path, s));
        if let Some(target) = decision {
            navigate(&target, NavigateOptions::default());
        }
    });
}
