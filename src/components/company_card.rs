//! Reusable card component for company directory items.

use leptos::prelude::*;

use crate::net::types::Company;

/// A clickable card representing a company in the directory.
#[component]
pub fn CompanyCard(company: Company) -> impl IntoView {
    let href = format!("/companies/{}", company.id);

    view! {
        <a class="company-card" href=href>
            {company
                .logo
                .map(|logo| view! { <img class="company-card__logo" src=logo alt=""/> })}
            <span class="company-card__name">{company.name}</span>
            <span class="company-card__meta">{company.industry} " · " {company.location}</span>
            <span class="company-card__positions">
                {format!("{} open positions", company.open_positions)}
            </span>
        </a>
    }
}
