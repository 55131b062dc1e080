//! Employer dashboard: headline stats plus recent postings.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
#[cfg(not(feature = "hydrate"))]
use crate::net::types::{EmployerStats, JobPosting};

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    // Stats and postings load together; either half degrades to its default.
    let dashboard = LocalResource::new(|| async {
        #[cfg(feature = "hydrate")]
        {
            let (stats, postings) = futures::join!(
                crate::net::api::fetch_employer_stats(),
                crate::net::api::fetch_employer_jobs(),
            );
            (stats.unwrap_or_default(), postings.unwrap_or_default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            (EmployerStats::default(), Vec::<JobPosting>::new())
        }
    });

    view! {
        <div class="employer-dashboard">
            <header class="employer-dashboard__header">
                <h1>"Dashboard"</h1>
                <a class="btn btn--primary" href="/employer/jobs">"Manage postings"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    dashboard.get().map(|(stats, postings)| {
                        view! {
                            <div class="employer-dashboard__stats">
                                <StatCard label="Active jobs" value=stats.active_jobs/>
                                <StatCard label="Total applicants" value=stats.total_applicants/>
                                <StatCard label="This week" value=stats.applicants_this_week/>
                                <StatCard label="Profile views" value=stats.profile_views/>
                            </div>

                            <section class="employer-dashboard__recent">
                                <h2>"Recent postings"</h2>
                                {if postings.is_empty() {
                                    view! { <p>"No postings yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="employer-dashboard__postings">
                                            {postings
                                                .into_iter()
                                                .take(5)
                                                .map(|posting| view! {
                                                    <li class="employer-dashboard__posting">
                                                        <span>{posting.title}</span>
                                                        <span class="employer-dashboard__posting-meta">
                                                            {format!(
                                                                "{} · {} applicants",
                                                                posting.status, posting.applicants
                                                            )}
                                                        </span>
                                                    </li>
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                    .into_any()
                                }}
                            </section>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
