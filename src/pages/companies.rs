//! Company directory page.

use leptos::prelude::*;

use crate::components::company_card::CompanyCard;

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let companies = LocalResource::new(|| async {
        crate::net::api::fetch_companies().await.unwrap_or_default()
    });

    view! {
        <div class="companies-page">
            <h1>"Companies"</h1>
            <Suspense fallback=move || view! { <p>"Loading companies..."</p> }>
                {move || {
                    companies.get().map(|list| {
                        if list.is_empty() {
                            view! { <p>"No companies listed yet."</p> }.into_any()
                        } else {
                            view! {
                                <div class="companies-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|company| view! { <CompanyCard company=company/> })
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
