//! Reusable card component for job list items.

use leptos::prelude::*;

use crate::net::types::JobSummary;

/// A clickable card representing a job in list views.
#[component]
pub fn JobCard(job: JobSummary, saved: bool, on_toggle_save: Callback<String>) -> impl IntoView {
    let href = format!("/jobs/{}", job.id);
    let job_id = job.id.clone();
    let score = job.match_score.map(|s| format!("{}% match", s.round()));

    view! {
        <div class="job-card">
            <a class="job-card__body" href=href>
                <span class="job-card__title">{job.title}</span>
                <span class="job-card__company">{job.company_name}</span>
                <span class="job-card__meta">
                    {job.location} " · " {job.job_type}
                    {job.salary_range.map(|range| format!(" · {range}"))}
                </span>
                <span class="job-card__footer">
                    <span class="job-card__posted">{job.posted_at}</span>
                    {score.map(|label| view! { <span class="job-card__match">{label}</span> })}
                </span>
            </a>
            <button
                class=move || {
                    if saved { "job-card__save job-card__save--active" } else { "job-card__save" }
                }
                title=move || if saved { "Unsave job" } else { "Save job" }
                on:click=move |_| on_toggle_save.run(job_id.clone())
            >
                {move || if saved { "★" } else { "☆" }}
            </button>
        </div>
    }
}
