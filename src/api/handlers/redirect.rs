//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::short_code_path::short_code_param;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /shorturls/{short_url}/`
///
/// # Request Flow
///
/// 1. Decode the short code to a record id
/// 2. Atomically increment the record's usage count
/// 3. Return 301 Moved Permanently with `Location` set to the stored URL
///
/// The count is committed before the response is built, so a client that
/// sees the redirect has already been counted.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or no record has that id.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let short_url = short_code_param(path, &uri)?;
    let record = state.short_url_service.resolve(&short_url).await?;

    let location = HeaderValue::from_bytes(record.url.as_bytes()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
