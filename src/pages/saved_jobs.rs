//! Saved jobs page: the job list filtered to the session's saved set.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
#[cfg(feature = "hydrate")]
use crate::net::types::UserPatch;
use crate::state::session::use_session;

#[component]
pub fn SavedJobsPage() -> impl IntoView {
    let session = use_session();

    let jobs = LocalResource::new(|| async {
        crate::net::api::fetch_jobs("").await.unwrap_or_default()
    });

    let saved_ids = move || session.get().user.map(|u| u.saved_jobs).unwrap_or_default();

    // Unsaving here removes the card immediately via the session list.
    let on_toggle_save = Callback::new(move |job_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let mut list = session
                .with_untracked(|s| s.user.as_ref().map(|u| u.saved_jobs.clone()))
                .unwrap_or_default();
            list.retain(|existing| existing != &job_id);
            crate::state::session::update_user(
                session,
                UserPatch { saved_jobs: Some(list), ..UserPatch::default() },
            );
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::set_job_saved(&job_id, false).await {
                    leptos::logging::warn!("unsave failed (kept local state): {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job_id;
        }
    });

    view! {
        <div class="saved-jobs-page">
            <h1>"Saved jobs"</h1>
            <Suspense fallback=move || view! { <p>"Loading saved jobs..."</p> }>
                {move || {
                    jobs.get().map(|list| {
                        let saved = saved_ids();
                        let kept: Vec<_> =
                            list.into_iter().filter(|job| saved.contains(&job.id)).collect();
                        if kept.is_empty() {
                            view! {
                                <p class="saved-jobs-page__empty">
                                    "No saved jobs. Star a job from the "
                                    <a href="/jobs">"job list"</a> " to keep it here."
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="jobs-page__list">
                                    {kept
                                        .into_iter()
                                        .map(|job| {
                                            view! {
                                                <JobCard job=job saved=true on_toggle_save=on_toggle_save/>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
