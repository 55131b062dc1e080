//! # joblane
//!
//! Leptos + WASM web client for the JobLane job board: job-seeker and
//! employer portals rendered from a shared component set, backed by REST
//! calls to the external API service.
//!
//! This crate contains pages, components, the session store, the token
//! gateway, and the two-stage route guard. The `ssr` binary only serves and
//! guards the client app; all data and authorization authority stays with
//! the backend API.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
