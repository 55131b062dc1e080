//! Bearer-token storage and OAuth redirect handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live in two places: localStorage (read by every authenticated API
//! call) and the `accessToken` cookie (read by the server-side edge guard
//! before any page code runs). Every write path here updates both copies so
//! the two checks observe the same login state.
//!
//! Writes are confined to login, OAuth callback, and logout, each
//! user-initiated and effectively serial, so no locking is involved.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use crate::util::storage;

const ACCESS_KEY: &str = "joblane_access_token";
const REFRESH_KEY: &str = "joblane_refresh_token";

/// Cookie mirrored for the edge guard. The name is part of the server
/// contract; see the edge middleware.
pub const ACCESS_COOKIE: &str = "accessToken";

/// Cookie lifetime in seconds (seven days, matching backend token expiry).
const COOKIE_MAX_AGE: u32 = 7 * 24 * 60 * 60;

/// Read the stored access token, if any.
pub fn access_token() -> Option<String> {
    storage::load_string(ACCESS_KEY)
}

/// Read the stored refresh token, if any.
pub fn refresh_token() -> Option<String> {
    storage::load_string(REFRESH_KEY)
}

/// Persist both tokens to localStorage and mirror the access token into the
/// edge-guard cookie. Calling twice with the same values is a no-op in
/// effect.
pub fn store_tokens(access: &str, refresh: &str) {
    storage::save_string(ACCESS_KEY, access);
    storage::save_string(REFRESH_KEY, refresh);
    write_cookie(&set_cookie_value(ACCESS_COOKIE, access));
}

/// Remove both token copies. Runs before the session store clears so no
/// window exists where a token is present but the session reads
/// unauthenticated.
pub fn clear_tokens() {
    storage::remove(ACCESS_KEY);
    storage::remove(REFRESH_KEY);
    write_cookie(&clear_cookie_value(ACCESS_COOKIE));
}

/// Navigate the browser to the backend's Google OAuth entry point.
///
/// Completion happens via a redirect back to `/auth/callback` carrying
/// tokens and flags as query parameters; this function does not return a
/// session.
pub fn google_auth() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/api/auth/google");
        }
    }
}

/// Read the access token currently visible in `document.cookie`.
pub fn cookie_access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = read_cookie_header()?;
        parse_cookie(&header, ACCESS_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// What `reconcile` decided to do about the cookie/localStorage pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenReconcile {
    /// Both copies agree (including both absent).
    InSync,
    /// Storage has a token the cookie lost; rewrite the cookie.
    RewriteCookie,
    /// Cookie has a token but storage does not; expire the cookie.
    ExpireCookie,
}

/// Pure reconciliation decision. localStorage is authoritative: the cookie
/// exists only to feed the coarse edge check, so it is rebuilt from storage
/// when the two diverge.
pub fn reconcile_action(stored: Option<&str>, cookie: Option<&str>) -> TokenReconcile {
    match (stored, cookie) {
        (Some(s), Some(c)) if s != c => TokenReconcile::RewriteCookie,
        (Some(_), None) => TokenReconcile::RewriteCookie,
        (None, Some(_)) => TokenReconcile::ExpireCookie,
        _ => TokenReconcile::InSync,
    }
}

/// Repair cookie/localStorage divergence (browser cleared one copy but not
/// the other). Runs once during app hydration, before the session settles.
pub fn reconcile() {
    let stored = access_token();
    let cookie = cookie_access_token();
    match reconcile_action(stored.as_deref(), cookie.as_deref()) {
        TokenReconcile::InSync => {}
        TokenReconcile::RewriteCookie => {
            if let Some(token) = stored {
                leptos::logging::log!("token cookie out of sync; rewriting from storage");
                write_cookie(&set_cookie_value(ACCESS_COOKIE, &token));
            }
        }
        TokenReconcile::ExpireCookie => {
            leptos::logging::log!("stray token cookie without stored token; expiring");
            write_cookie(&clear_cookie_value(ACCESS_COOKIE));
        }
    }
}

/// Extract the value of `name` from a `Cookie:`-style header string.
#[cfg(any(test, feature = "hydrate"))]
fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name && !value.trim().is_empty() {
            Some(value.trim().to_owned())
        } else {
            None
        }
    })
}

/// Build the `document.cookie` assignment string that sets `name`.
fn set_cookie_value(name: &str, token: &str) -> String {
    format!("{name}={token}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax")
}

/// Build the `document.cookie` assignment string that expires `name`.
fn clear_cookie_value(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn read_cookie_header() -> Option<String> {
    html_document()?.cookie().ok()
}

fn write_cookie(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
