//! Login page: email + password form plus the Google OAuth redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;

/// Trim and check the credential pair before hitting the backend.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let busy = move || session.get().loading;
    // Backend rejection surfaces through the session; form errors are local.
    let error_text = move || {
        let local = form_error.get();
        if local.is_empty() { session.get().error.unwrap_or_default() } else { local }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(pair) => pair,
                Err(message) => {
                    form_error.set(message.to_owned());
                    return;
                }
            };
        form_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let ok = crate::state::session::login_with_credentials(
                    session,
                    &email_value,
                    &password_value,
                )
                .await;
                if ok {
                    let target = session.with_untracked(|s| {
                        s.user
                            .as_ref()
                            .map(|u| crate::auth::callback::destination_for(u, false, false))
                            .unwrap_or(crate::routes::guard::JOBS_HOME)
                    });
                    navigate(target, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_google = move |_| {
        crate::state::session::login_with_google();
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"JobLane"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
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
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <button class="login-button login-button--google" on:click=on_google>
                    "Continue with Google"
                </button>
                <Show when=move || !error_text().is_empty()>
                    <p class="login-error">{error_text}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
