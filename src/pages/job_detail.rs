//! Job detail page with the apply action.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let params = use_params_map();
    let job_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let job = LocalResource::new(move || {
        let id = job_id();
        async move { crate::net::api::fetch_job(&id).await }
    });

    // Local echo of a successful apply so the button flips without refetch.
    let just_applied = RwSignal::new(false);
    let apply_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_apply = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        apply_error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let id = job_id();
            leptos::task::spawn_local(async move {
                match crate::net::api::apply_to_job(&id).await {
                    Ok(()) => just_applied.set(true),
                    Err(message) => apply_error.set(message),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="job-detail-page">
            <Suspense fallback=move || view! { <p>"Loading job..."</p> }>
                {move || {
                    job.get().map(|maybe_job| match maybe_job {
                        None => view! { <p class="job-detail-page__missing">"Job not found."</p> }
                            .into_any(),
                        Some(job) => {
                            let applied = move || job.has_applied || just_applied.get();
                            let company_href = format!("/companies/{}", job.company_id);
                            let requirements = job.requirements.clone();
                            view! {
                                <article class="job-detail">
                                    <header class="job-detail__header">
                                        <h1>{job.title.clone()}</h1>
                                        <a class="job-detail__company" href=company_href>
                                            {job.company_name.clone()}
                                        </a>
                                        <p class="job-detail__meta">
                                            {job.location.clone()} " · " {job.job_type.clone()}
                                            {job.salary_range.clone().map(|r| format!(" · {r}"))}
                                        </p>
                                        {job.match_score.map(|score| view! {
                                            <p class="job-detail__match">
                                                {format!("{}% match", score.round())}
                                            </p>
                                        })}
                                    </header>

                                    <section class="job-detail__description">
                                        <p>{job.description.clone()}</p>
                                    </section>

                                    {(!requirements.is_empty()).then(|| view! {
                                        <section class="job-detail__requirements">
                                            <h2>"Requirements"</h2>
                                            <ul>
                                                {requirements
                                                    .iter()
                                                    .map(|req| view! { <li>{req.clone()}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </section>
                                    })}

                                    <footer class="job-detail__actions">
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || applied() || busy.get()
                                            on:click=on_apply
                                        >
                                            {move || {
                                                if applied() {
                                                    "Applied"
                                                } else if busy.get() {
                                                    "Applying..."
                                                } else {
                                                    "Apply now"
                                                }
                                            }}
                                        </button>
                                        <Show when=move || !apply_error.get().is_empty()>
                                            <p class="login-error">{move || apply_error.get()}</p>
                                        </Show>
                                    </footer>
                                </article>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
