//! Handler for short URL inspection.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::Uri,
};

use crate::api::dto::short_url::ShortUrlResponse;
use super::short_code_path::short_code_param;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current state of a short URL without counting a use.
///
/// # Endpoint
///
/// `GET /shorturls/{short_url}/info/`
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or no record has that id.
pub async fn info_handler(
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let short_url = short_code_param(path, &uri)?;
    let record = state.short_url_service.info(&short_url).await?;

    Ok(Json(record.into()))
}
