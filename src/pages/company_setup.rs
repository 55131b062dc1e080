//! Employer company setup: required before the dashboard is reachable.

#[cfg(test)]
#[path = "company_setup_test.rs"]
mod company_setup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::{EmployerInfo, UserPatch};

/// Validated company-setup input.
#[derive(Debug, PartialEq, Eq)]
struct CompanyInput {
    name: String,
    industry: String,
    location: String,
}

fn validate_company(
    name: &str,
    industry: &str,
    location: &str,
) -> Result<CompanyInput, &'static str> {
    let name = name.trim();
    let industry = industry.trim();
    let location = location.trim();
    if name.is_empty() {
        return Err("Enter your company name.");
    }
    if industry.is_empty() {
        return Err("Enter an industry.");
    }
    if location.is_empty() {
        return Err("Enter a location.");
    }
    Ok(CompanyInput {
        name: name.to_owned(),
        industry: industry.to_owned(),
        location: location.to_owned(),
    })
}

#[component]
pub fn CompanySetupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let industry = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
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
        let input = match validate_company(&name.get(), &industry.get(), &location.get()) {
            Ok(input) => input,
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
                match crate::net::api::create_company(
                    &input.name,
                    &input.industry,
                    &input.location,
                )
                .await
                {
                    Ok(company) => {
                        // Attach the new company locally so the guard stops
                        // bouncing to setup; the next refresh confirms it.
                        crate::state::session::update_user(
                            session,
                            UserPatch {
                                employer: Some(EmployerInfo { company_id: Some(company.id) }),
                                ..UserPatch::default()
                            },
                        );
                        navigate(
                            crate::routes::guard::EMPLOYER_HOME,
                            NavigateOptions::default(),
                        );
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
            let _ = input;
        }
    };

    view! {
        <div class="company-setup-page">
            <h1>"Set up your company"</h1>
            <p>"Applicants will see this on every posting."</p>
            <form class="company-setup-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Company name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="text"
                    placeholder="Industry"
                    prop:value=move || industry.get()
                    on:input=move |ev| industry.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create company" }}
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="login-error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
