//! Post-OAuth role selection page.
//!
//! OAuth signups arrive without a role; the account stays here until one is
//! chosen. The backend returns the updated user, which then routes exactly
//! like a fresh login.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;

#[component]
pub fn RoleSelectionPage() -> impl IntoView {
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let session = crate::state::session::use_session();

    // Shared by both role buttons, so it lives in a Callback.
    let choose = Callback::new(move |role: Role| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_role(role).await {
                    Ok(user) => {
                        let target =
                            crate::auth::callback::destination_for(&user, true, false);
                        crate::state::session::login(session, user);
                        navigate(target, NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
        }
    });

    view! {
        <div class="role-page">
            <h1>"How will you use JobLane?"</h1>
            <div class="role-page__choices">
                <button
                    class="role-page__choice"
                    disabled=move || busy.get()
                    on:click=move |_| choose.run(Role::JobSeeker)
                >
                    <span class="role-page__choice-title">"I'm looking for a job"</span>
                    <span class="role-page__choice-body">
                        "Browse openings, track applications, follow companies."
                    </span>
                </button>
                <button
                    class="role-page__choice"
                    disabled=move || busy.get()
                    on:click=move |_| choose.run(Role::Employer)
                >
                    <span class="role-page__choice-title">"I'm hiring"</span>
                    <span class="role-page__choice-body">
                        "Post jobs, review applicants, build your company page."
                    </span>
                </button>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="login-error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
