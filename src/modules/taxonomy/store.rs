use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use super::model::{TaxonomyChanges, TaxonomyKind, TaxonomyRecord};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{} not found", .0.label())]
    NotFound(TaxonomyKind),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Which rows a read is allowed to see with respect to `deleted_at`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SoftDeleteScope {
    #[default]
    ExcludeTrashed,
    WithTrashed,
}

impl SoftDeleteScope {
    pub fn admits(self, record: &TaxonomyRecord) -> bool {
        match self {
            SoftDeleteScope::ExcludeTrashed => !record.is_trashed(),
            SoftDeleteScope::WithTrashed => true,
        }
    }

    /// SQL predicate for this scope, always safe to append after `WHERE`.
    pub fn predicate(self) -> &'static str {
        match self {
            SoftDeleteScope::ExcludeTrashed => "deleted_at IS NULL",
            SoftDeleteScope::WithTrashed => "TRUE",
        }
    }
}

/// Row-level persistence for one taxonomy table.
///
/// Every mutating method is a single atomic write. Methods returning
/// `Option` yield `None` when no row matched their filter.
#[async_trait]
pub trait TaxonomyStore: Send + Sync {
    fn kind(&self) -> TaxonomyKind;

    async fn insert(&self, record: &TaxonomyRecord) -> RepositoryResult<TaxonomyRecord>;

    async fn fetch(&self, id: &str, scope: SoftDeleteScope) -> RepositoryResult<Option<TaxonomyRecord>>;

    /// All rows admitted by `scope`, oldest first.
    async fn fetch_all(&self, scope: SoftDeleteScope) -> RepositoryResult<Vec<TaxonomyRecord>>;

    /// Applies `changes` to a non-trashed row.
    async fn update(
        &self,
        id: &str,
        changes: &TaxonomyChanges,
        now: OffsetDateTime,
    ) -> RepositoryResult<Option<TaxonomyRecord>>;

    /// Sets `deleted_at` on a non-trashed row.
    async fn mark_deleted(&self, id: &str, now: OffsetDateTime) -> RepositoryResult<Option<TaxonomyRecord>>;

    /// Clears `deleted_at` on a trashed row.
    async fn clear_deleted(&self, id: &str, now: OffsetDateTime) -> RepositoryResult<Option<TaxonomyRecord>>;
}
