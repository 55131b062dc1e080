//! OAuth callback page.
//!
//! Drives the state machine in `auth::callback`: validate query parameters,
//! persist tokens, fetch the user, then redirect by role. Failures show a
//! message and land on the home page after a fixed delay, never on an
//! authenticated destination.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::auth::callback::CallbackPhase;
#[cfg(feature = "hydrate")]
use crate::auth::callback::{
    CallbackParams, ERROR_REDIRECT_DELAY_MS, ParamCheck, check_params, phase_after_user_fetch,
};

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let query = use_query_map();
    let phase = RwSignal::new(CallbackPhase::AwaitingTokens);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let session = crate::state::session::use_session();
        let params = query.with_untracked(|q| CallbackParams::from_query(|key| q.get(key)));
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match check_params(&params) {
                ParamCheck::Fail(message) => {
                    phase.set(CallbackPhase::Error(message));
                }
                ParamCheck::Proceed { access, refresh } => {
                    crate::net::tokens::store_tokens(&access, &refresh);
                    phase.set(CallbackPhase::FetchingUser);

                    let user = crate::net::api::fetch_current_user().await;
                    let next = phase_after_user_fetch(&params, user.as_ref());
                    if let (Some(dest), Some(user)) = (next.redirect_target(), user) {
                        crate::state::session::login(session, user);
                        phase.set(next);
                        navigate(dest, NavigateOptions::default());
                        return;
                    }
                    phase.set(next);
                }
            }

            // Terminal error: hold the message, then go home. No retry.
            if matches!(phase.get_untracked(), CallbackPhase::Error(_)) {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    ERROR_REDIRECT_DELAY_MS,
                )))
                .await;
                navigate(crate::routes::guard::HOME, NavigateOptions::default());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &query;
    }

    view! {
        <div class="callback-page">
            {move || match phase.get() {
                CallbackPhase::AwaitingTokens | CallbackPhase::FetchingUser => view! {
                    <div class="callback-page__pending">
                        <div class="spinner"></div>
                        <p>"Completing sign-in..."</p>
                    </div>
                }
                .into_any(),
                CallbackPhase::NeedsRoleSelection
                | CallbackPhase::NeedsCompanySetup
                | CallbackPhase::Ready(_) => view! {
                    <div class="callback-page__pending">
                        <div class="spinner"></div>
                        <p>"Signed in. Taking you there..."</p>
                    </div>
                }
                .into_any(),
                CallbackPhase::Error(message) => view! {
                    <div class="callback-page__error">
                        <p class="callback-page__error-title">"Sign-in failed"</p>
                        <p>{message}</p>
                        <p class="callback-page__error-hint">"Returning to the home page..."</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
