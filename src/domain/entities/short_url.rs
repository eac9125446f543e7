//! Short URL record: the persisted mapping from an id to a long URL.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::utils::short_code;

/// A stored URL with its usage counter.
///
/// The short code is never stored; it is derived from `id` on demand.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub url: String,
    pub date_submitted: DateTime<Utc>,
    pub usage_count: i64,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(id: i64, url: String, date_submitted: DateTime<Utc>, usage_count: i64) -> Self {
        Self {
            id,
            url,
            date_submitted,
            usage_count,
        }
    }

    /// Base-62 short code identifying this record.
    pub fn short_code(&self) -> String {
        short_code::encode(self.id)
    }
}

impl fmt::Display for ShortUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.short_code(), self.url)
    }
}

/// Input data for creating a new record.
///
/// Everything except the URL is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub url: String,
}

impl NewShortUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
