//! Applicants across all of the employer's postings.

use leptos::prelude::*;

#[component]
pub fn EmployerApplicantsPage() -> impl IntoView {
    let applicants = LocalResource::new(|| async {
        crate::net::api::fetch_employer_applicants().await.unwrap_or_default()
    });

    view! {
        <div class="employer-applicants-page">
            <h1>"Applicants"</h1>
            <Suspense fallback=move || view! { <p>"Loading applicants..."</p> }>
                {move || {
                    applicants.get().map(|list| {
                        if list.is_empty() {
                            view! { <p>"No applications yet."</p> }.into_any()
                        } else {
                            view! {
                                <table class="employer-applicants-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Position"</th>
                                            <th>"Status"</th>
                                            <th>"Applied"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|applicant| view! {
                                                <tr>
                                                    <td>{applicant.name}</td>
                                                    <td>{applicant.job_title}</td>
                                                    <td>{applicant.status.label()}</td>
                                                    <td>{applicant.applied_at}</td>
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
