//! Shared wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and wraps every response in a
//! `{success, data?, message?}` envelope. Ids travel as opaque strings.
//! These types mirror that schema exactly so serde round-trips stay
//! lossless and callers never touch raw `serde_json::Value`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope returned by every backend endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the request was accepted by the backend.
    pub success: bool,
    /// Payload, present on success (and sometimes on partial failure).
    #[serde(default = "none_data")]
    pub data: Option<T>,
    /// Human-readable message, usually present on failure.
    pub message: Option<String>,
}

fn none_data<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    /// Collapse the envelope into a `Result`, substituting `fallback`
    /// when a failed response carries no message.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| fallback.to_owned())
        } else {
            Err(self.message.unwrap_or_else(|| fallback.to_owned()))
        }
    }
}

/// Coarse user category gating which application areas are reachable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    JobSeeker,
    Employer,
    Admin,
}

impl Role {
    /// Wire name of the role, as the backend expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::JobSeeker => "job_seeker",
            Role::Employer => "employer",
            Role::Admin => "admin",
        }
    }
}

/// Employer-only attributes attached to a user account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerInfo {
    /// Company the employer belongs to; absent until company setup completes.
    pub company_id: Option<String>,
}

/// User-adjustable preferences, persisted server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Preferred color scheme (`"light"` / `"dark"`).
    pub theme: Option<String>,
    /// Whether to email new job alerts.
    pub job_alerts: Option<bool>,
}

/// The authenticated account as returned by `/api/auth/me` and login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account identifier (opaque string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Avatar image URL, if one is set.
    pub avatar: Option<String>,
    /// Coarse role deciding which portal the user lands in.
    #[serde(default)]
    pub role: Role,
    /// Profile completion percentage, 0..=100.
    #[serde(default)]
    pub profile_completion: u8,
    /// Whether a resume file has been uploaded.
    #[serde(default)]
    pub resume_uploaded: bool,
    /// Whether the job-seeker onboarding flow has been completed.
    pub is_onboarded: Option<bool>,
    /// Whether the account email has been verified.
    pub is_email_verified: Option<bool>,
    /// Employer attributes; present only for employer accounts.
    pub employer: Option<EmployerInfo>,
    /// User preferences, if the backend has any stored.
    pub preferences: Option<Preferences>,
    /// Ids of jobs the user has saved.
    #[serde(default)]
    pub saved_jobs: Vec<String>,
    /// Ids of companies the user follows.
    #[serde(default)]
    pub following_companies: Vec<String>,
}

impl User {
    /// Shallow-merge `patch` over this user, last write wins.
    ///
    /// Only fields set in the patch are touched; everything else is kept.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(pc) = patch.profile_completion {
            self.profile_completion = pc;
        }
        if let Some(uploaded) = patch.resume_uploaded {
            self.resume_uploaded = uploaded;
        }
        if let Some(onboarded) = patch.is_onboarded {
            self.is_onboarded = Some(onboarded);
        }
        if let Some(employer) = patch.employer {
            self.employer = Some(employer);
        }
        if let Some(preferences) = patch.preferences {
            self.preferences = Some(preferences);
        }
        if let Some(saved) = patch.saved_jobs {
            self.saved_jobs = saved;
        }
        if let Some(following) = patch.following_companies {
            self.following_companies = following;
        }
    }
}

/// Partial update for [`User::apply_patch`]; unset fields are left alone.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<Role>,
    pub profile_completion: Option<u8>,
    pub resume_uploaded: Option<bool>,
    pub is_onboarded: Option<bool>,
    pub employer: Option<EmployerInfo>,
    pub preferences: Option<Preferences>,
    pub saved_jobs: Option<Vec<String>>,
    pub following_companies: Option<Vec<String>>,
}

/// A job as it appears in list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// Unique job identifier (opaque string).
    pub id: String,
    /// Job title.
    pub title: String,
    /// Hiring company display name.
    pub company_name: String,
    /// Location label (city / remote).
    pub location: String,
    /// Employment type label (e.g. `"full_time"`).
    pub job_type: String,
    /// Salary range label, if disclosed.
    pub salary_range: Option<String>,
    /// Opaque match score computed by the backend; higher is better.
    pub match_score: Option<f64>,
    /// Posting timestamp label, preformatted by the backend.
    pub posted_at: String,
}

/// Full job detail for the job page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    /// Company this posting belongs to.
    pub company_id: String,
    pub company_name: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    /// Full description body.
    pub description: String,
    /// Requirement bullet points.
    #[serde(default)]
    pub requirements: Vec<String>,
    pub match_score: Option<f64>,
    pub posted_at: String,
    /// Whether the current user already applied.
    #[serde(default)]
    pub has_applied: bool,
}

/// Lifecycle status of a submitted application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// Human label shown in application rows.
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::InReview => "In review",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// One row in the job seeker's application list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
}

/// A company profile card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub industry: String,
    pub location: String,
    /// Count of currently open postings.
    #[serde(default)]
    pub open_positions: i64,
    #[serde(default)]
    pub description: String,
}

/// An in-app notification row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: String,
}

/// Headline numbers for the employer dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerStats {
    pub active_jobs: i64,
    pub total_applicants: i64,
    pub applicants_this_week: i64,
    pub profile_views: i64,
}

/// One of the employer's own postings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    /// Posting status label (`"active"`, `"paused"`, `"closed"`).
    pub status: String,
    /// Applicant count so far.
    #[serde(default)]
    pub applicants: i64,
    pub posted_at: String,
}

/// One applicant row in the employer's applicant list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRow {
    pub id: String,
    pub name: String,
    pub job_title: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
}
