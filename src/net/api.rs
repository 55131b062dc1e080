//! REST API helpers for communicating with the backend job-board service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, attaching the
//! stored bearer token. Server-side (SSR): stubs returning `None`/error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/data
//! fetch failures degrade UI behavior without crashing hydration. Every
//! backend response is the `{success, data?, message?}` envelope; failures
//! surface the backend message when present, a fixed fallback otherwise.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ApplicantRow, Application, Company, EmployerStats, Job, JobPosting, JobSummary, Notification,
    Role, User,
};
#[cfg(feature = "hydrate")]
use super::types::ApiEnvelope;
use serde::Serialize;

#[cfg(any(test, feature = "hydrate"))]
fn job_endpoint(job_id: &str) -> String {
    format!("/api/jobs/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn job_apply_endpoint(job_id: &str) -> String {
    format!("/api/jobs/{job_id}/apply")
}

#[cfg(any(test, feature = "hydrate"))]
fn job_save_endpoint(job_id: &str) -> String {
    format!("/api/jobs/{job_id}/save")
}

#[cfg(any(test, feature = "hydrate"))]
fn company_endpoint(company_id: &str) -> String {
    format!("/api/companies/{company_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn company_follow_endpoint(company_id: &str) -> String {
    format!("/api/companies/{company_id}/follow")
}

#[cfg(any(test, feature = "hydrate"))]
fn notification_read_endpoint(notification_id: &str) -> String {
    format!("/api/notifications/{notification_id}/read")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Attach the stored bearer token, if any, to an outgoing request.
#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::net::tokens::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// POST `payload` as JSON to `url` and unwrap the enveloped `T`.
#[cfg(feature = "hydrate")]
async fn post_enveloped<T, P>(url: &str, payload: &P, what: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
    P: Serialize,
{
    let resp = with_auth(gloo_net::http::Request::post(url))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    envelope_result(resp, what).await
}

/// Decode the response envelope, mapping transport and backend failures to
/// a single message string.
#[cfg(feature = "hydrate")]
async fn envelope_result<T>(resp: gloo_net::http::Response, what: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let fallback = request_failed_message(what, resp.status());
    match resp.json::<ApiEnvelope<T>>().await {
        Ok(envelope) => envelope.into_result(&fallback),
        Err(_) => Err(fallback),
    }
}

/// GET an enveloped `T` from `url`, discarding failure detail.
#[cfg(feature = "hydrate")]
async fn get_enveloped<T>(url: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    let resp = with_auth(gloo_net::http::Request::get(url)).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    let envelope = resp.json::<ApiEnvelope<T>>().await.ok()?;
    if envelope.success { envelope.data } else { None }
}

// =============================================================
// Auth endpoints
// =============================================================

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// Log in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend failure message, or a generic one for transport
/// errors. Never panics.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        post_enveloped("/api/auth/login", &LoginPayload { email, password }, "login").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

#[derive(Serialize)]
struct RegisterPayload<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
    role: Role,
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(email: &str, password: &str, name: &str, role: Role) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        post_enveloped(
            "/api/auth/register",
            &RegisterPayload { email, password, name, role },
            "register",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name, role);
        Err("not available on server".to_owned())
    }
}

/// Invalidate the server session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string so callers can log the failure; local logout
/// proceeds regardless.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/auth/logout"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(())
        } else {
            Err(request_failed_message("logout", resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

/// Fetch the currently authenticated user from `GET /api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordPayload<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Change the account password via `POST /api/auth/change-password`.
///
/// # Errors
///
/// Returns the backend failure message (e.g. wrong current password).
pub async fn change_password(current: &str, new: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        // The envelope carries no payload on success; decode to Value.
        post_enveloped::<serde_json::Value, _>(
            "/api/auth/change-password",
            &ChangePasswordPayload { current_password: current, new_password: new },
            "change password",
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        Err("not available on server".to_owned())
    }
}

#[derive(Serialize)]
struct RolePayload {
    role: Role,
}

/// Set the account role via `PUT /api/auth/role` (post-OAuth role selection).
///
/// # Errors
///
/// Returns the backend failure message on rejection.
pub async fn update_role(role: Role) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put("/api/auth/role"))
            .json(&RolePayload { role })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        envelope_result(resp, "role update").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
        Err("not available on server".to_owned())
    }
}

#[derive(Serialize)]
struct OnboardingPayload<'a> {
    title: &'a str,
    skills: &'a [String],
}

/// Complete job-seeker onboarding via `POST /api/users/onboarding`.
///
/// # Errors
///
/// Returns the backend failure message on rejection.
pub async fn complete_onboarding(title: &str, skills: &[String]) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        post_enveloped(
            "/api/users/onboarding",
            &OnboardingPayload { title, skills },
            "onboarding",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, skills);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Job-seeker data endpoints
// =============================================================

/// Fetch the job list from `GET /api/jobs`, optionally filtered by a search
/// term. Returns `None` on any failure.
pub async fn fetch_jobs(search: &str) -> Option<Vec<JobSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let url = if search.trim().is_empty() {
            "/api/jobs".to_owned()
        } else {
            let encoded: String = js_sys::encode_uri_component(search.trim()).into();
            format!("/api/jobs?search={encoded}")
        };
        get_enveloped(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
        None
    }
}

/// Fetch one job's detail from `GET /api/jobs/{id}`.
pub async fn fetch_job(job_id: &str) -> Option<Job> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&job_endpoint(job_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        None
    }
}

/// Submit an application via `POST /api/jobs/{id}/apply`.
///
/// # Errors
///
/// Returns the backend failure message (e.g. already applied).
pub async fn apply_to_job(job_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&job_apply_endpoint(job_id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        envelope_result::<serde_json::Value>(resp, "application").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err("not available on server".to_owned())
    }
}

/// Save or unsave a job (`POST`/`DELETE /api/jobs/{id}/save`).
///
/// # Errors
///
/// Returns the backend failure message on rejection.
pub async fn set_job_saved(job_id: &str, saved: bool) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = job_save_endpoint(job_id);
        let builder = if saved {
            gloo_net::http::Request::post(&url)
        } else {
            gloo_net::http::Request::delete(&url)
        };
        let resp = with_auth(builder).send().await.map_err(|e| e.to_string())?;
        envelope_result::<serde_json::Value>(resp, "saved job").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (job_id, saved);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's applications from `GET /api/applications`.
pub async fn fetch_applications() -> Option<Vec<Application>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/applications").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the company directory from `GET /api/companies`.
pub async fn fetch_companies() -> Option<Vec<Company>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/companies").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one company profile from `GET /api/companies/{id}`.
pub async fn fetch_company(company_id: &str) -> Option<Company> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&company_endpoint(company_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = company_id;
        None
    }
}

/// Follow or unfollow a company (`POST`/`DELETE /api/companies/{id}/follow`).
///
/// # Errors
///
/// Returns the backend failure message on rejection.
pub async fn set_company_followed(company_id: &str, followed: bool) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = company_follow_endpoint(company_id);
        let builder = if followed {
            gloo_net::http::Request::post(&url)
        } else {
            gloo_net::http::Request::delete(&url)
        };
        let resp = with_auth(builder).send().await.map_err(|e| e.to_string())?;
        envelope_result::<serde_json::Value>(resp, "follow").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (company_id, followed);
        Err("not available on server".to_owned())
    }
}

/// Fetch notifications from `GET /api/notifications`.
pub async fn fetch_notifications() -> Option<Vec<Notification>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/notifications").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mark one notification read via `PUT /api/notifications/{id}/read`.
///
/// # Errors
///
/// Returns the backend failure message on rejection.
pub async fn mark_notification_read(notification_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(&notification_read_endpoint(
            notification_id,
        )))
        .send()
        .await
        .map_err(|e| e.to_string())?;
        envelope_result::<serde_json::Value>(resp, "notification").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notification_id;
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Employer endpoints
// =============================================================

#[derive(Serialize)]
struct CompanyPayload<'a> {
    name: &'a str,
    industry: &'a str,
    location: &'a str,
}

/// Create the employer's company record via `POST /api/companies`
/// (company-setup flow).
///
/// # Errors
///
/// Returns the backend failure message on rejection.
pub async fn create_company(name: &str, industry: &str, location: &str) -> Result<Company, String> {
    #[cfg(feature = "hydrate")]
    {
        post_enveloped(
            "/api/companies",
            &CompanyPayload { name, industry, location },
            "company setup",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, industry, location);
        Err("not available on server".to_owned())
    }
}

/// Fetch employer dashboard numbers from `GET /api/employer/stats`.
pub async fn fetch_employer_stats() -> Option<EmployerStats> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/employer/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the employer's own postings from `GET /api/employer/jobs`.
pub async fn fetch_employer_jobs() -> Option<Vec<JobPosting>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/employer/jobs").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch applicants across the employer's postings from
/// `GET /api/employer/applications`.
pub async fn fetch_employer_applicants() -> Option<Vec<ApplicantRow>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/employer/applications").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
