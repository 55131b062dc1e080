//! Company profile page with the follow toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "hydrate")]
use crate::net::types::UserPatch;
use crate::state::session::use_session;

#[component]
pub fn CompanyDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let company_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let company = LocalResource::new(move || {
        let id = company_id();
        async move { crate::net::api::fetch_company(&id).await }
    });

    let following = move || {
        let id = company_id();
        session
            .get()
            .user
            .is_some_and(|u| u.following_companies.contains(&id))
    };

    // Optimistic follow toggle mirroring the saved-jobs pattern.
    let on_toggle_follow = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let id = company_id();
            let mut list = session
                .with_untracked(|s| s.user.as_ref().map(|u| u.following_companies.clone()))
                .unwrap_or_default();
            let now_following = if list.iter().any(|existing| existing == &id) {
                list.retain(|existing| existing != &id);
                false
            } else {
                list.push(id.clone());
                true
            };
            crate::state::session::update_user(
                session,
                UserPatch { following_companies: Some(list), ..UserPatch::default() },
            );
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::set_company_followed(&id, now_following).await {
                    leptos::logging::warn!("follow update failed (kept local state): {e}");
                }
            });
        }
    };

    view! {
        <div class="company-detail-page">
            <Suspense fallback=move || view! { <p>"Loading company..."</p> }>
                {move || {
                    company.get().map(|maybe| match maybe {
                        None => view! { <p>"Company not found."</p> }.into_any(),
                        Some(company) => view! {
                            <article class="company-detail">
                                <header class="company-detail__header">
                                    {company
                                        .logo
                                        .clone()
                                        .map(|logo| view! {
                                            <img class="company-detail__logo" src=logo alt=""/>
                                        })}
                                    <h1>{company.name.clone()}</h1>
                                    <p class="company-detail__meta">
                                        {company.industry.clone()} " · " {company.location.clone()}
                                    </p>
                                    <button class="btn" on:click=on_toggle_follow>
                                        {move || if following() { "Following ✓" } else { "Follow" }}
                                    </button>
                                </header>
                                <section class="company-detail__about">
                                    <p>{company.description.clone()}</p>
                                </section>
                                <p class="company-detail__positions">
                                    {format!("{} open positions", company.open_positions)}
                                </p>
                            </article>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
