//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls/`                   - Create a short URL
//! - `GET  /shorturls/{short_url}/`       - Redirect to the original URL
//! - `GET  /shorturls/{short_url}/info/`  - Record details
//! - `GET  /health`                       - Store health check
//!
//! Trailing slashes are optional on every route.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::short_url_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
