//! One row in the job seeker's application list.

use leptos::prelude::*;

use crate::net::types::Application;

/// Table-style row showing an application and its current status.
#[component]
pub fn ApplicationRow(application: Application) -> impl IntoView {
    let href = format!("/jobs/{}", application.job_id);
    let status_class = format!(
        "application-row__status application-row__status--{}",
        match application.status {
            crate::net::types::ApplicationStatus::Submitted => "submitted",
            crate::net::types::ApplicationStatus::InReview => "in-review",
            crate::net::types::ApplicationStatus::Interview => "interview",
            crate::net::types::ApplicationStatus::Offer => "offer",
            crate::net::types::ApplicationStatus::Rejected => "rejected",
        }
    );

    view! {
        <div class="application-row">
            <a class="application-row__job" href=href>
                <span class="application-row__title">{application.job_title}</span>
                <span class="application-row__company">{application.company_name}</span>
            </a>
            <span class=status_class>{application.status.label()}</span>
            <span class="application-row__date">{application.applied_at}</span>
        </div>
    }
}
