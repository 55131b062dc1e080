//! Headline-number card for the employer dashboard.

use leptos::prelude::*;

/// A single labeled number.
#[component]
pub fn StatCard(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
