//! Short code path parameter shared by the redirect and info handlers.

use axum::{
    extract::{Path, rejection::PathRejection},
    http::Uri,
};

use crate::application::services::short_url_service::short_url_not_found;
use crate::error::AppError;

/// Unwraps the `{short_url}` path segment.
///
/// A segment the router cannot decode (invalid UTF-8 after percent-decoding)
/// is answered like any other unknown code. The error echoes the segment as
/// the client sent it.
pub(crate) fn short_code_param(
    path: Result<Path<String>, PathRejection>,
    uri: &Uri,
) -> Result<String, AppError> {
    path.map(|Path(code)| code).map_err(|rejection| {
        let raw = uri
            .path()
            .trim_start_matches('/')
            .split('/')
            .nth(1)
            .unwrap_or_default();
        tracing::debug!("Rejected short code path {}: {}", raw, rejection.body_text());
        short_url_not_found(raw)
    })
}
