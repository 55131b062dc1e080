//! Profile page: completion meter, resume status, account facts.

use leptos::prelude::*;

use crate::state::session::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let user = move || session.get().user;

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            {move || {
                user().map(|user| {
                    let completion = user.profile_completion.min(100);
                    let bar_style = format!("width: {completion}%");
                    view! {
                        <div class="profile-card">
                            <header class="profile-card__header">
                                {user
                                    .avatar
                                    .clone()
                                    .map(|avatar| view! {
                                        <img class="profile-card__avatar" src=avatar alt=""/>
                                    })}
                                <h2>{user.name.clone()}</h2>
                                <p class="profile-card__email">{user.email.clone()}</p>
                            </header>

                            <section class="profile-card__completion">
                                <p>{format!("Profile {completion}% complete")}</p>
                                <div class="profile-card__bar">
                                    <div class="profile-card__bar-fill" style=bar_style></div>
                                </div>
                            </section>

                            <ul class="profile-card__facts">
                                <li>
                                    {if user.resume_uploaded {
                                        "Resume uploaded ✓"
                                    } else {
                                        "No resume on file"
                                    }}
                                </li>
                                <li>
                                    {if user.is_email_verified.unwrap_or(false) {
                                        "Email verified ✓"
                                    } else {
                                        "Email not verified"
                                    }}
                                </li>
                                <li>{format!("{} saved jobs", user.saved_jobs.len())}</li>
                                <li>
                                    {format!(
                                        "Following {} companies",
                                        user.following_companies.len()
                                    )}
                                </li>
                            </ul>
                        </div>
                    }
                })
            }}
        </div>
    }
}
