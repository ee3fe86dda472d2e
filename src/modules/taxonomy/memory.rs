use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::model::{TaxonomyChanges, TaxonomyKind, TaxonomyRecord};
use super::store::{RepositoryResult, SoftDeleteScope, TaxonomyStore};

/// Process-local store keeping rows in insertion order.
pub struct MemoryTaxonomyStore {
    kind: TaxonomyKind,
    rows: RwLock<Vec<TaxonomyRecord>>,
}

impl MemoryTaxonomyStore {
    pub fn new(kind: TaxonomyKind) -> Self {
        Self {
            kind,
            rows: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TaxonomyStore for MemoryTaxonomyStore {
    fn kind(&self) -> TaxonomyKind {
        self.kind
    }

    async fn insert(&self, record: &TaxonomyRecord) -> RepositoryResult<TaxonomyRecord> {
        let mut stored = record.clone();
        if !self.kind.has_description() {
            stored.description = None;
        }
        self.rows.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn fetch(&self, id: &str, scope: SoftDeleteScope) -> RepositoryResult<Option<TaxonomyRecord>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| row.id == id && scope.admits(row))
            .cloned())
    }

    async fn fetch_all(&self, scope: SoftDeleteScope) -> RepositoryResult<Vec<TaxonomyRecord>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|row| scope.admits(row)).cloned().collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: &TaxonomyChanges,
        now: OffsetDateTime,
    ) -> RepositoryResult<Option<TaxonomyRecord>> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|row| row.id == id && !row.is_trashed()) else {
            return Ok(None);
        };

        changes.apply_to(row, now);
        if !self.kind.has_description() {
            row.description = None;
        }
        Ok(Some(row.clone()))
    }

    async fn mark_deleted(&self, id: &str, now: OffsetDateTime) -> RepositoryResult<Option<TaxonomyRecord>> {
        let mut rows = self.rows.write().await;
        Ok(rows
            .iter_mut()
            .find(|row| row.id == id && !row.is_trashed())
            .map(|row| {
                row.deleted_at = Some(now);
                row.updated_at = now;
                row.clone()
            }))
    }

    async fn clear_deleted(&self, id: &str, now: OffsetDateTime) -> RepositoryResult<Option<TaxonomyRecord>> {
        let mut rows = self.rows.write().await;
        Ok(rows
            .iter_mut()
            .find(|row| row.id == id && row.is_trashed())
            .map(|row| {
                row.deleted_at = None;
                row.updated_at = now;
                row.clone()
            }))
    }
}
