#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;
    use tower_http::trace::TraceLayer;

    use joblane::app::{App, shell};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(axum::middleware::from_fn(joblane::server::edge::edge_guard))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "joblane listening");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Binary only exists under the ssr feature; hydrate builds enter via lib.rs.
}
