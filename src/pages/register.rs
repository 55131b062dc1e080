//! Registration page for job seekers and employers.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::use_session;

const MIN_PASSWORD_LEN: usize = 8;

/// Validated registration input.
#[derive(Debug, PartialEq, Eq)]
struct RegistrationInput {
    name: String,
    email: String,
    password: String,
}

fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegistrationInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegistrationInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    // Role defaults to job seeker; employers opt in explicitly.
    let as_employer = RwSignal::new(false);
    let form_error = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let busy = move || session.get().loading;
    let error_text = move || {
        let local = form_error.get();
        if local.is_empty() { session.get().error.unwrap_or_default() } else { local }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let input = match validate_registration(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        form_error.set(String::new());
        let role = if as_employer.get() { Role::Employer } else { Role::JobSeeker };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let ok = crate::state::session::register(
                    session,
                    &input.email,
                    &input.password,
                    &input.name,
                    role,
                )
                .await;
                if ok {
                    let target = session.with_untracked(|s| {
                        s.user
                            .as_ref()
                            .map(|u| crate::auth::callback::destination_for(u, true, false))
                            .unwrap_or(crate::routes::guard::ONBOARDING)
                    });
                    navigate(target, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, role);
        }
    };

    view! {
        <div class="register-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <label class="register-role">
                        <input
                            type="checkbox"
                            prop:checked=move || as_employer.get()
                            on:change=move |ev| as_employer.set(event_target_checked(&ev))
                        />
                        "I am hiring (employer account)"
                    </label>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !error_text().is_empty()>
                    <p class="login-error">{error_text}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
