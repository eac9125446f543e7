//! Repository trait for short URL records.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence boundary for short URL records.
///
/// Implementations own two guarantees the rest of the service relies on:
/// URL uniqueness on [`create`](Self::create) and lost-update-free
/// [`increment_usage`](Self::increment_usage).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_short_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Stores a new record with a fresh id, zero usage and the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if the URL is already stored.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortUrl>, AppError>;

    /// Atomically adds one to the usage counter and returns the updated record.
    ///
    /// Concurrent calls for the same id must each apply a distinct increment.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` with the incremented counter
    /// - `Ok(None)` if no record has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_usage(&self, id: i64) -> Result<Option<ShortUrl>, AppError>;

    /// Lists records newest first.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `page_size` - Number of items per page
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortUrl>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums the usage counters of all records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn total_usage(&self) -> Result<i64, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
