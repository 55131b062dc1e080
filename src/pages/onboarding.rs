//! Job-seeker onboarding: headline + skills, then off to the job list.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Split the comma-separated skills field into trimmed, non-empty entries.
fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn validate_onboarding(title: &str, skills_raw: &str) -> Result<(String, Vec<String>), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Tell us your current or desired job title.");
    }
    let skills = parse_skills(skills_raw);
    if skills.is_empty() {
        return Err("Add at least one skill.");
    }
    Ok((title.to_owned(), skills))
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let session = crate::state::session::use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (title_value, skill_list) =
            match validate_onboarding(&title.get(), &skills.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::complete_onboarding(&title_value, &skill_list).await {
                    Ok(user) => {
                        crate::state::session::login(session, user);
                        navigate(crate::routes::guard::JOBS_HOME, NavigateOptions::default());
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
            let _ = (title_value, skill_list);
        }
    };

    view! {
        <div class="onboarding-page">
            <h1>"Welcome to JobLane"</h1>
            <p>"A few details help us match you with the right openings."</p>
            <form class="onboarding-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Job title (e.g. Backend Engineer)"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="text"
                    placeholder="Skills, comma separated"
                    prop:value=move || skills.get()
                    on:input=move |ev| skills.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Get started" }}
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="login-error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
