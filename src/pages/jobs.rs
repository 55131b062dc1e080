//! Job list page with search and save toggles.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;

use crate::components::job_card::JobCard;
#[cfg(feature = "hydrate")]
use crate::net::types::UserPatch;
use crate::state::session::use_session;

/// Flip `id`'s membership in the saved list. Returns the new list and
/// whether the id is saved afterwards.
#[cfg(any(test, feature = "hydrate"))]
fn toggle_id(mut list: Vec<String>, id: &str) -> (Vec<String>, bool) {
    if list.iter().any(|existing| existing == id) {
        list.retain(|existing| existing != id);
        (list, false)
    } else {
        list.push(id.to_owned());
        (list, true)
    }
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let session = use_session();
    let search = RwSignal::new(String::new());

    // Re-fetches whenever the search term changes.
    let jobs = LocalResource::new(move || {
        let term = search.get();
        async move { crate::net::api::fetch_jobs(&term).await.unwrap_or_default() }
    });

    let saved_jobs = move || {
        session.get().user.map(|u| u.saved_jobs).unwrap_or_default()
    };

    // Optimistic: the session list flips immediately, the backend call runs
    // behind it and failures are logged only.
    let on_toggle_save = Callback::new(move |job_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let current = session
                .with_untracked(|s| s.user.as_ref().map(|u| u.saved_jobs.clone()))
                .unwrap_or_default();
            let (next, now_saved) = toggle_id(current, &job_id);
            crate::state::session::update_user(
                session,
                UserPatch { saved_jobs: Some(next), ..UserPatch::default() },
            );
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::set_job_saved(&job_id, now_saved).await {
                    leptos::logging::warn!("saved-job update failed (kept local state): {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job_id;
        }
    });

    view! {
        <div class="jobs-page">
            <header class="jobs-page__header">
                <h1>"Find your next role"</h1>
                <input
                    class="jobs-page__search"
                    type="search"
                    placeholder="Search title, company, or skill"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading jobs..."</p> }>
                {move || {
                    jobs.get().map(|list| {
                        if list.is_empty() {
                            view! { <p class="jobs-page__empty">"No jobs match your search."</p> }
                                .into_any()
                        } else {
                            let saved = saved_jobs();
                            view! {
                                <div class="jobs-page__list">
                                    {list
                                        .into_iter()
                                        .map(|job| {
                                            let is_saved = saved.contains(&job.id);
                                            view! {
                                                <JobCard
                                                    job=job
                                                    saved=is_saved
                                                    on_toggle_save=on_toggle_save
                                                />
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
