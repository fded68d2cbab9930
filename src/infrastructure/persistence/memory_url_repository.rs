//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local repository backed by an ordered map.
///
/// Holds the same uniqueness guarantee as the PostgreSQL table: inserting an
/// identifier that already exists fails with [`AppError::Conflict`].
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    mappings: RwLock<BTreeMap<i64, UrlMapping>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn count(&self) -> Result<i64, AppError> {
        let len = self.mappings.read().await.len();
        i64::try_from(len).map_err(|e| AppError::internal(e.to_string()))
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut mappings = self.mappings.write().await;

        if mappings.contains_key(&new_mapping.short_url) {
            return Err(AppError::Conflict);
        }

        let mapping = new_mapping.into_mapping(Utc::now());
        mappings.insert(mapping.short_url, mapping.clone());

        Ok(mapping)
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.mappings.read().await.get(&short_url).cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .mappings
            .read()
            .await
            .values()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}
