//! OAuth callback state machine.
//!
//! DESIGN
//! ======
//! The backend's OAuth entry point redirects back to `/auth/callback` with
//! tokens and flags as query parameters. The flow is an explicit finite
//! state machine with pure transition functions, independent of rendering:
//!
//! ```text
//! AwaitingTokens -> FetchingUser -> NeedsRoleSelection
//!        \                 \     -> NeedsCompanySetup
//!         +-> Error(msg)    \    -> Ready(dest)
//!                            +-> Error(msg)
//! ```
//!
//! Terminal states are one of five redirect destinations or the error
//! display, which lands on the home page after a fixed delay. No retry: a
//! failed callback always goes home.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use crate::net::types::{Role, User};
use crate::routes::guard::{COMPANY_SETUP, EMPLOYER_HOME, JOBS_HOME, ONBOARDING, ROLE_SELECTION};

/// How long the error display stays up before redirecting home.
pub const ERROR_REDIRECT_DELAY_MS: u32 = 3000;

/// Query parameters carried on the callback redirect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallbackParams {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// `"true"` when the backend just created this account.
    pub is_new_user: bool,
    /// `"true"` when the account has no role yet (fresh OAuth signup).
    pub needs_role_selection: bool,
    /// Error message forwarded by the backend, if the OAuth exchange failed.
    pub error: Option<String>,
}

impl CallbackParams {
    /// Build from a query-parameter lookup. Boolean flags are the literal
    /// string `"true"`; anything else (including absence) is false.
    pub fn from_query(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            access_token: lookup("accessToken").filter(|v| !v.is_empty()),
            refresh_token: lookup("refreshToken").filter(|v| !v.is_empty()),
            is_new_user: flag(lookup("isNewUser")),
            needs_role_selection: flag(lookup("needsRoleSelection")),
            error: lookup("error").filter(|v| !v.is_empty()),
        }
    }
}

fn flag(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

/// Current phase of the callback flow, rendered by the callback page.
#[derive(Clone, Debug, PartialEq)]
pub enum CallbackPhase {
    /// Parsing query parameters.
    AwaitingTokens,
    /// Tokens stored; `/auth/me` in flight.
    FetchingUser,
    /// Terminal: the account has no role yet; off to role selection.
    NeedsRoleSelection,
    /// Terminal: employer with no company record; off to company setup.
    NeedsCompanySetup,
    /// Terminal: navigating to the role-appropriate home surface.
    Ready(&'static str),
    /// Terminal: showing the message, then redirecting home after the fixed
    /// delay.
    Error(String),
}

impl CallbackPhase {
    /// Where a terminal success phase navigates, `None` for non-terminal
    /// phases and errors.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            CallbackPhase::NeedsRoleSelection => Some(ROLE_SELECTION),
            CallbackPhase::NeedsCompanySetup => Some(COMPANY_SETUP),
            CallbackPhase::Ready(dest) => Some(*dest),
            _ => None,
        }
    }
}

/// Outcome of inspecting the callback parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamCheck {
    /// Tokens present; store them and fetch the user.
    Proceed { access: String, refresh: String },
    /// Backend error or missing tokens; terminal failure.
    Fail(String),
}

/// First transition: validate the query parameters.
///
/// A backend-supplied error message wins over everything; otherwise both
/// tokens must be present.
pub fn check_params(params: &CallbackParams) -> ParamCheck {
    if let Some(message) = &params.error {
        return ParamCheck::Fail(message.clone());
    }
    match (&params.access_token, &params.refresh_token) {
        (Some(access), Some(refresh)) => {
            ParamCheck::Proceed { access: access.clone(), refresh: refresh.clone() }
        }
        _ => ParamCheck::Fail("invalid authentication response".to_owned()),
    }
}

/// Final transition: pick the redirect destination for a fetched user.
///
/// The role-selection flag wins regardless of the fetched role; employers
/// without a company record go to setup before ever seeing the dashboard;
/// new or un-onboarded job seekers go to onboarding.
pub fn destination_for(user: &User, is_new_user: bool, needs_role_selection: bool) -> &'static str {
    if needs_role_selection {
        return ROLE_SELECTION;
    }
    match user.role {
        Role::Employer => {
            let has_company = user
                .employer
                .as_ref()
                .is_some_and(|e| e.company_id.is_some());
            if has_company { EMPLOYER_HOME } else { COMPANY_SETUP }
        }
        Role::JobSeeker | Role::Admin => {
            if is_new_user || !user.is_onboarded.unwrap_or(false) {
                ONBOARDING
            } else {
                JOBS_HOME
            }
        }
    }
}

/// Phase after the user fetch resolves. An empty fetch right after a token
/// exchange is a fatal flow error, never a silent fallback to some
/// authenticated destination.
pub fn phase_after_user_fetch(params: &CallbackParams, user: Option<&User>) -> CallbackPhase {
    let Some(user) = user else {
        return CallbackPhase::Error("could not load your account".to_owned());
    };
    match destination_for(user, params.is_new_user, params.needs_role_selection) {
        ROLE_SELECTION => CallbackPhase::NeedsRoleSelection,
        COMPANY_SETUP => CallbackPhase::NeedsCompanySetup,
        dest => CallbackPhase::Ready(dest),
    }
}
