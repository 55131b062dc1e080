//! Account settings: password change, theme, job alerts.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::{Preferences, UserPatch};
use crate::state::session::use_session;
use crate::util::theme;

const MIN_PASSWORD_LEN: usize = 8;

fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    if current.is_empty() {
        return Err("Enter your current password.");
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 8 characters.");
    }
    if new == current {
        return Err("New password must differ from the current one.");
    }
    if new != confirm {
        return Err("Passwords do not match.");
    }
    Ok((current.to_owned(), new.to_owned()))
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let failed = RwSignal::new(false);
    let dark = RwSignal::new(theme::read_preference());

    let job_alerts = move || {
        session
            .get()
            .user
            .and_then(|u| u.preferences.and_then(|p| p.job_alerts))
            .unwrap_or(false)
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (current_value, new_value) = match validate_password_change(
            &current.get(),
            &new_password.get(),
            &confirm.get(),
        ) {
            Ok(values) => values,
            Err(text) => {
                failed.set(true);
                message.set(text.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&current_value, &new_value).await {
                Ok(()) => {
                    failed.set(false);
                    message.set("Password updated.".to_owned());
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                Err(text) => {
                    failed.set(true);
                    message.set(text);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current_value, new_value);
        }
    };

    // Theme is applied instantly and mirrored into preferences optimistically;
    // the authoritative copy follows on the next profile refresh.
    let on_toggle_theme = move |_| {
        let next = theme::toggle(dark.get());
        dark.set(next);
        #[cfg(feature = "hydrate")]
        {
            let prefs = Preferences {
                theme: Some(if next { "dark".to_owned() } else { "light".to_owned() }),
                job_alerts: session
                    .with_untracked(|s| {
                        s.user.as_ref().and_then(|u| {
                            u.preferences.as_ref().and_then(|p| p.job_alerts)
                        })
                    }),
            };
            crate::state::session::update_user(
                session,
                UserPatch { preferences: Some(prefs), ..UserPatch::default() },
            );
        }
    };

    let on_toggle_alerts = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        #[cfg(feature = "hydrate")]
        {
            let theme_value = session.with_untracked(|s| {
                s.user
                    .as_ref()
                    .and_then(|u| u.preferences.as_ref().and_then(|p| p.theme.clone()))
            });
            crate::state::session::update_user(
                session,
                UserPatch {
                    preferences: Some(Preferences {
                        theme: theme_value,
                        job_alerts: Some(enabled),
                    }),
                    ..UserPatch::default()
                },
            );
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = enabled;
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>

            <section class="settings-section">
                <h2>"Appearance"</h2>
                <label class="settings-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || dark.get()
                        on:change=on_toggle_theme
                    />
                    "Dark mode"
                </label>
            </section>

            <section class="settings-section">
                <h2>"Job alerts"</h2>
                <label class="settings-toggle">
                    <input
                        type="checkbox"
                        prop:checked=job_alerts
                        on:change=on_toggle_alerts
                    />
                    "Email me about new matching jobs"
                </label>
            </section>

            <section class="settings-section">
                <h2>"Change password"</h2>
                <form class="settings-form" on:submit=on_change_password>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Current password"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class=move || {
                        if failed.get() { "login-error" } else { "settings-success" }
                    }>{move || message.get()}</p>
                </Show>
            </section>
        </div>
    }
}
