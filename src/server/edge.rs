//! Edge-time authorization filter.
//!
//! Runs as axum middleware before any page code executes. It sees only the
//! `accessToken` cookie, so it is a coarse reject-fast filter: protected
//! paths without a token bounce to the home page, everything else passes
//! through for the in-page guard to refine. It shares the path table in
//! `routes::guard`, so the two checks cannot drift.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::net::tokens::ACCESS_COOKIE;
use crate::routes::guard::edge_decision;

/// Middleware entry point.
pub async fn edge_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let has_token = jar.get(ACCESS_COOKIE).is_some();

    if let Some(target) = edge_decision(&path, has_token) {
        tracing::debug!(%path, "edge guard: no token cookie, redirecting");
        return Redirect::temporary(target).into_response();
    }
    next.run(request).await
}
