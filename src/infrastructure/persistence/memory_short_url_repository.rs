//! Process-local implementation of the short URL repository.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Records {
    next_id: i64,
    by_id: BTreeMap<i64, ShortUrl>,
    id_by_url: HashMap<String, i64>,
}

/// Repository keeping records in memory behind a single lock.
///
/// Used when no database is configured and in HTTP tests. Every mutation
/// holds the write lock for its whole read-modify-write, which makes
/// increments linearizable. Ids start at 1 and are never reused.
pub struct InMemoryShortUrlRepository {
    records: RwLock<Records>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        debug!("Using in-memory short URL store");
        Self {
            records: RwLock::new(Records {
                next_id: 1,
                ..Records::default()
            }),
        }
    }
}

impl Default for InMemoryShortUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut records = self.records.write().await;

        if records.id_by_url.contains_key(&new_short_url.url) {
            return Err(AppError::duplicate(
                "Short URL with this url already exists",
                json!({ "url": new_short_url.url }),
            ));
        }

        let id = records.next_id;
        records.next_id += 1;

        let record = ShortUrl::new(id, new_short_url.url, Utc::now(), 0);
        records.id_by_url.insert(record.url.clone(), id);
        records.by_id.insert(id, record.clone());

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.records.read().await.by_id.get(&id).cloned())
    }

    async fn increment_usage(&self, id: i64) -> Result<Option<ShortUrl>, AppError> {
        let mut records = self.records.write().await;

        Ok(records.by_id.get_mut(&id).map(|record| {
            record.usage_count += 1;
            record.clone()
        }))
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortUrl>, AppError> {
        let offset = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let limit = usize::try_from(page_size).unwrap_or(0);

        let records = self.records.read().await;
        let mut items: Vec<ShortUrl> = records.by_id.values().cloned().collect();
        items.sort_by(|a, b| {
            b.date_submitted
                .cmp(&a.date_submitted)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(items.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.read().await.by_id.len() as i64)
    }

    async fn total_usage(&self) -> Result<i64, AppError> {
        Ok(self
            .records
            .read()
            .await
            .by_id
            .values()
            .map(|r| r.usage_count)
            .sum())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
