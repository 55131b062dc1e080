//! Application list page for job seekers.

use leptos::prelude::*;

use crate::components::application_row::ApplicationRow;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let applications = LocalResource::new(|| async {
        crate::net::api::fetch_applications().await.unwrap_or_default()
    });

    view! {
        <div class="applications-page">
            <h1>"Your applications"</h1>
            <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                {move || {
                    applications.get().map(|list| {
                        if list.is_empty() {
                            view! {
                                <p class="applications-page__empty">
                                    "Nothing yet. " <a href="/jobs">"Browse jobs"</a> " to get started."
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="applications-page__list">
                                    {list
                                        .into_iter()
                                        .map(|application| {
                                            view! { <ApplicationRow application=application/> }
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
