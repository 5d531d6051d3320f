//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health probe, the Leptos SSR page, and the `/pkg` asset
//! directory into one Axum router. The page owns no server data, so there
//! is no application state to inject.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;


/// Routes that do not depend on Leptos options.
pub fn base_routes() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback(not_found)
}

/// Leptos SSR page at `/`, static assets at `/pkg`, plus `base_routes`.
pub fn leptos_app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(portfolio::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
