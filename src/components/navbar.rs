//! Top navigation bar, role-aware.
//!
//! Job seekers see jobs/applications/companies links; employers see their
//! dashboard links. The bar reads the shared session and offers logout and
//! the dark-mode toggle.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::use_session;
use crate::util::theme;

/// Application navigation bar. Hidden links collapse by role; unauthenticated
/// visitors get login/register actions instead.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let dark = RwSignal::new(theme::read_preference());

    let authenticated = move || session.get().authenticated;
    let role = move || session.get().role();
    let user_name = move || session.get().user.map(|u| u.name).unwrap_or_default();

    let on_toggle_dark = move |_| {
        dark.set(theme::toggle(dark.get()));
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::session::logout(session).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"JobLane"</a>

            <Show when=move || role() == Some(Role::Employer)>
                <div class="navbar__links">
                    <a href="/employer">"Dashboard"</a>
                    <a href="/employer/jobs">"Postings"</a>
                    <a href="/employer/applicants">"Applicants"</a>
                </div>
            </Show>
            <Show when=move || authenticated() && role() != Some(Role::Employer)>
                <div class="navbar__links">
                    <a href="/jobs">"Jobs"</a>
                    <a href="/applications">"Applications"</a>
                    <a href="/saved">"Saved"</a>
                    <a href="/companies">"Companies"</a>
                </div>
            </Show>

            <div class="navbar__actions">
                <button class="navbar__dark-toggle" on:click=on_toggle_dark title="Toggle dark mode">
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <a class="navbar__login" href="/login">"Log in"</a>
                            <a class="navbar__register" href="/register">"Sign up"</a>
                        }
                    }
                >
                    <a class="navbar__bell" href="/notifications" title="Notifications">"🔔"</a>
                    <a class="navbar__profile" href="/profile">{user_name}</a>
                    <button class="navbar__logout" on:click=on_logout>"Log out"</button>
                </Show>
            </div>
        </nav>
    }
}
