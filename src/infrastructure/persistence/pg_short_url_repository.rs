//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for short URL records.
///
/// URL uniqueness is enforced by the `short_urls_url_key` constraint and
/// counter updates are a single `UPDATE ... RETURNING`, so the row lock
/// serializes concurrent increments.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let record = sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO short_urls (url)
            VALUES ($1)
            RETURNING id, url, date_submitted, usage_count
            "#,
        )
        .bind(&new_short_url.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortUrl>, AppError> {
        let record = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, url, date_submitted, usage_count
            FROM short_urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_usage(&self, id: i64) -> Result<Option<ShortUrl>, AppError> {
        let record = sqlx::query_as::<_, ShortUrl>(
            r#"
            UPDATE short_urls
            SET usage_count = usage_count + 1
            WHERE id = $1
            RETURNING id, url, date_submitted, usage_count
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortUrl>, AppError> {
        let offset = (page - 1).saturating_mul(page_size);

        let records = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, url, date_submitted, usage_count
            FROM short_urls
            ORDER BY date_submitted DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_usage(&self) -> Result<i64, AppError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(usage_count), 0)::BIGINT FROM short_urls")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
