//! API route configuration.

use crate::api::handlers::{create_handler, info_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes.
///
/// Paths are declared without trailing slashes; the top-level router trims
/// them from incoming requests.
///
/// # Endpoints
///
/// - `POST /shorturls`                    - Create a short URL
/// - `GET  /shorturls/{short_url}`        - Count a use and redirect (301)
/// - `GET  /shorturls/{short_url}/info`   - Inspect without counting
pub fn short_url_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(create_handler))
        .route("/shorturls/{short_url}", get(redirect_handler))
        .route("/shorturls/{short_url}/info", get(info_handler))
}
