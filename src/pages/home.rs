//! Public landing page.
//!
//! Also the redirect target for every guard rejection, so it must render
//! fine for unauthenticated visitors. Settled logged-in visitors are
//! forwarded to their role's home surface.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::callback::destination_for;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.authenticated {
            if let Some(user) = &state.user {
                navigate(destination_for(user, false, false), NavigateOptions::default());
            }
        }
    });

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Work that fits. People who fit."</h1>
                <p>"JobLane matches job seekers with companies that are actually hiring."</p>
                <div class="home-hero__actions">
                    <a class="btn btn--primary" href="/register">"Get started"</a>
                    <a class="btn" href="/login">"Sign in"</a>
                </div>
            </section>
            <section class="home-highlights">
                <div class="home-highlight">
                    <h3>"For job seekers"</h3>
                    <p>"Search openings, track every application, follow companies you like."</p>
                </div>
                <div class="home-highlight">
                    <h3>"For employers"</h3>
                    <p>"Post roles, review applicants, and build your company page."</p>
                </div>
            </section>
        </div>
    }
}
