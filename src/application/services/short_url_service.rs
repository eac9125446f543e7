//! Short URL creation, resolution and inspection.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::short_code;

/// Aggregate figures for the admin projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageSummary {
    pub records: i64,
    pub total_usage: i64,
}

/// Service orchestrating the short code codec and the record store.
///
/// Holds no mutable state of its own; uniqueness and counter atomicity
/// are delegated to the [`ShortUrlRepository`].
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Stores `url` and returns the new record with a zero usage count.
    ///
    /// The URL is stored exactly as submitted: no normalization happens
    /// before the uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is longer than
    /// [`MAX_URL_BYTES`] or contains control characters.
    /// Returns [`AppError::Duplicate`] if the URL is already stored.
    pub async fn create(&self, url: String) -> Result<ShortUrl, AppError> {
        validate_url(&url)?;

        let record = self.repository.create(NewShortUrl::new(url)).await?;

        info!(id = record.id, short_url = %record.short_code(), "Short URL created");

        Ok(record)
    }

    /// Counts one use of `code` and returns the record to redirect to.
    ///
    /// The counter is already incremented when this returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    pub async fn resolve(&self, code: &str) -> Result<ShortUrl, AppError> {
        let id = decode_or_not_found(code)?;

        let record = self
            .repository
            .increment_usage(id)
            .await?
            .ok_or_else(|| short_url_not_found(code))?;

        debug!(id, usage_count = record.usage_count, "Short URL resolved");

        Ok(record)
    }

    /// Returns the current state of the record behind `code` without counting a use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    pub async fn info(&self, code: &str) -> Result<ShortUrl, AppError> {
        let id = decode_or_not_found(code)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| short_url_not_found(code))
    }

    /// Lists records newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `page_size` is below 1,
    /// or if the page starts beyond the addressable offset range.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortUrl>, AppError> {
        if page < 1 || page_size < 1 {
            return Err(AppError::bad_request(
                "page and page_size must be at least 1",
                json!({ "page": page, "page_size": page_size }),
            ));
        }

        if (page - 1).checked_mul(page_size).is_none() {
            return Err(AppError::bad_request(
                "page is out of range",
                json!({ "page": page, "page_size": page_size }),
            ));
        }

        self.repository.list(page, page_size).await
    }

    /// Returns the number of records and the sum of their usage counters.
    pub async fn summary(&self) -> Result<UsageSummary, AppError> {
        Ok(UsageSummary {
            records: self.repository.count().await?,
            total_usage: self.repository.total_usage().await?,
        })
    }

    /// Checks that the underlying store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

/// Longest URL accepted, in bytes. Keeps the unique index entry within
/// PostgreSQL's btree row limit.
pub const MAX_URL_BYTES: usize = 2048;

/// Presence and format are checked on the request. This only guards what the
/// store and the redirect need: a bounded size and a URL that can be emitted
/// as a `Location` header.
fn validate_url(url: &str) -> Result<(), AppError> {
    if url.len() > MAX_URL_BYTES {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "field": "url", "reason": "url is too long", "max_bytes": MAX_URL_BYTES }),
        ));
    }

    if url.chars().any(char::is_control) {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "field": "url", "reason": "contains control characters" }),
        ));
    }

    Ok(())
}

/// Error returned for any short code that does not resolve to a record.
///
/// Malformed and unknown codes share this error so callers cannot tell them apart.
pub fn short_url_not_found(code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "short_url": code }))
}

fn decode_or_not_found(code: &str) -> Result<i64, AppError> {
    short_code::decode(code).map_err(|e| {
        debug!("Rejected short code: {}", e);
        short_url_not_found(code)
    })
}
