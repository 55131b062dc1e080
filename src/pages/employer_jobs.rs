//! Employer posting list.

use leptos::prelude::*;

#[component]
pub fn EmployerJobsPage() -> impl IntoView {
    let postings = LocalResource::new(|| async {
        crate::net::api::fetch_employer_jobs().await.unwrap_or_default()
    });

    view! {
        <div class="employer-jobs-page">
            <h1>"Your postings"</h1>
            <Suspense fallback=move || view! { <p>"Loading postings..."</p> }>
                {move || {
                    postings.get().map(|list| {
                        if list.is_empty() {
                            view! { <p>"You haven't posted any jobs yet."</p> }.into_any()
                        } else {
                            view! {
                                <table class="employer-jobs-table">
                                    <thead>
                                        <tr>
                                            <th>"Title"</th>
                                            <th>"Status"</th>
                                            <th>"Applicants"</th>
                                            <th>"Posted"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|posting| view! {
                                                <tr>
                                                    <td>{posting.title}</td>
                                                    <td>{posting.status}</td>
                                                    <td>{posting.applicants}</td>
                                                    <td>{posting.posted_at}</td>
                                                </tr>
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
