//! DTOs for the short URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request to create a short URL.
///
/// Only `url` is read. Server-assigned fields such as `shortUrl` or
/// `usageCount` are ignored if a client sends them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The URL to shorten; must be absolute and at most 2048 characters.
    #[validate(
        required(message = "url is required"),
        length(max = 2048, message = "url must be at most 2048 characters"),
        url(message = "Invalid URL format")
    )]
    pub url: Option<String>,
}

/// Wire representation of a record.
///
/// `shortUrl` is derived from the record id and never stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub short_url: String,
    pub url: String,
    pub date_submitted: DateTime<Utc>,
    pub usage_count: i64,
}

impl From<ShortUrl> for ShortUrlResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            short_url: record.short_code(),
            url: record.url,
            date_submitted: record.date_submitted,
            usage_count: record.usage_count,
        }
    }
}
