//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY  /`             - Landing page on the root host, catcher page (and catch) elsewhere
//! - `ANY  /new`          - Landing form fallback on the root host, caught elsewhere
//! - `GET  /init-client`  - Websocket stream of caught requests for the host
//! - `ANY  /statusz`      - Plain-text counters (basic auth when configured)
//! - `/assets/*`          - Static assets with one-year cache headers
//! - `/favicon.ico`       - Favicon file
//! - anything else        - Caught
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging with host
//! - **Timeout** - Per-request deadline (`408 Request Timeout`)
//! - **www redirect** - `www.<host>` to `<host>`

use crate::api::handlers::{
    catch_handler, index_handler, init_client_handler, statusz_handler,
};
use crate::api::middleware::{cache_headers, status_auth, tracing, www_redirect};
use crate::state::AppState;
use crate::web::handlers::new_catcher_handler;
use axum::http::StatusCode;
use axum::routing::{any, get};
use axum::{Router, middleware};
use std::time::Duration;
use tower_http::services::ServeFile;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let config = state.config.clone();

    let statusz = Router::new()
        .route("/statusz", any(statusz_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            status_auth::layer,
        ));

    Router::new()
        .route("/", any(index_handler))
        .route("/new", any(new_catcher_handler))
        .route("/init-client", get(init_client_handler))
        .route_service("/favicon.ico", ServeFile::new(&config.favicon))
        .nest_service("/assets", cache_headers::cached_dir(&config.frontend_dir))
        .merge(statusz)
        .fallback(catch_handler)
        .with_state(state)
        .layer(middleware::from_fn(www_redirect::layer))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(tracing::layer())
}
