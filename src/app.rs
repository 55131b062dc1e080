//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    applications::ApplicationsPage, auth_callback::AuthCallbackPage, companies::CompaniesPage,
    company_detail::CompanyDetailPage, company_setup::CompanySetupPage,
    employer_applicants::EmployerApplicantsPage, employer_dashboard::EmployerDashboardPage,
    employer_jobs::EmployerJobsPage, home::HomePage, job_detail::JobDetailPage, jobs::JobsPage,
    login::LoginPage, notifications::NotificationsPage, onboarding::OnboardingPage,
    profile::ProfilePage, register::RegisterPage, role_selection::RoleSelectionPage,
    saved_jobs::SavedJobsPage, settings::SettingsPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, kicks off session hydration on the
/// client, installs the in-page route guard, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        crate::util::theme::apply(crate::util::theme::read_preference());
        leptos::task::spawn_local(async move {
            crate::state::session::hydrate(session).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/joblane.css"/>
        <Title text="JobLane"/>

        <Router>
            <RouteGuard/>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("callback"))
                        view=AuthCallbackPage
                    />
                    <Route path=(StaticSegment("auth"), StaticSegment("role")) view=RoleSelectionPage/>
                    <Route path=StaticSegment("onboarding") view=OnboardingPage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                    <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobDetailPage/>
                    <Route path=StaticSegment("applications") view=ApplicationsPage/>
                    <Route path=StaticSegment("saved") view=SavedJobsPage/>
                    <Route path=StaticSegment("companies") view=CompaniesPage/>
                    <Route
                        path=(StaticSegment("companies"), ParamSegment("id"))
                        view=CompanyDetailPage
                    />
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("employer") view=EmployerDashboardPage/>
                    <Route
                        path=(StaticSegment("employer"), StaticSegment("jobs"))
                        view=EmployerJobsPage
                    />
                    <Route
                        path=(StaticSegment("employer"), StaticSegment("applicants"))
                        view=EmployerApplicantsPage
                    />
                    <Route
                        path=(
                            StaticSegment("employer"),
                            StaticSegment("company"),
                            StaticSegment("setup"),
                        )
                        view=CompanySetupPage
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Invisible component that installs the in-page authorization guard.
/// Must live inside the `Router` so location and navigation are available.
#[component]
fn RouteGuard() -> impl IntoView {
    crate::routes::guard::install_route_guard();
}
