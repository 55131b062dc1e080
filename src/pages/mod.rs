//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form handling,
//! post-action navigation) and delegates rendering details to `components`.
//! Authorization lives in `routes::guard`, not in the pages.

pub mod applications;
pub mod auth_callback;
pub mod companies;
pub mod company_detail;
pub mod company_setup;
pub mod employer_applicants;
pub mod employer_dashboard;
pub mod employer_jobs;
pub mod home;
pub mod job_detail;
pub mod jobs;
pub mod login;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod register;
pub mod role_selection;
pub mod saved_jobs;
pub mod settings;
