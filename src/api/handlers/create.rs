//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::short_url::{CreateShortUrlRequest, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorturls/`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortUrl": "B",
///   "url": "https://example.com/a",
///   "dateSubmitted": "2024-03-01T12:00:00Z",
///   "usageCount": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, if `url` is missing,
/// malformed or longer than 2048 characters or bytes, or if the URL has
/// already been shortened.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortUrlResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let url = payload.url.ok_or_else(|| {
        AppError::bad_request("url is required", json!({ "field": "url" }))
    })?;
    let record = state.short_url_service.create(url).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
