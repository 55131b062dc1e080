//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list items and page chrome while reading shared state
//! from Leptos context providers; pages own orchestration.

pub mod application_row;
pub mod company_card;
pub mod job_card;
pub mod navbar;
pub mod notification_item;
pub mod stat_card;
