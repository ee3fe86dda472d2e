use std::sync::Arc;

use tracing::debug;

use super::model::{now, NewTaxonomy, TaxonomyChanges, TaxonomyKind, TaxonomyRecord};
use super::store::{RepositoryError, RepositoryResult, SoftDeleteScope, TaxonomyStore};
use crate::common::id::IdGenerator;

/// CRUD over one taxonomy table with soft-delete semantics.
///
/// Default reads go through `scope`; restore and the `*_with_trashed`
/// reads bypass it.
#[derive(Clone)]
pub struct TaxonomyRepository {
    store: Arc<dyn TaxonomyStore>,
    ids: Arc<dyn IdGenerator>,
    scope: SoftDeleteScope,
}

impl TaxonomyRepository {
    pub fn new(store: Arc<dyn TaxonomyStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            scope: SoftDeleteScope::default(),
        }
    }

    pub fn kind(&self) -> TaxonomyKind {
        self.store.kind()
    }

    fn not_found(&self) -> RepositoryError {
        RepositoryError::NotFound(self.kind())
    }

    pub async fn create(&self, fields: NewTaxonomy) -> RepositoryResult<TaxonomyRecord> {
        let at = now();
        let description = if self.kind().has_description() {
            fields.description
        } else {
            None
        };
        let record = TaxonomyRecord {
            id: self.ids.generate(),
            name: fields.name,
            description,
            is_active: fields.is_active.unwrap_or(true),
            created_at: at,
            updated_at: at,
            deleted_at: None,
        };

        let stored = self.store.insert(&record).await?;
        debug!(kind = self.kind().label(), id = %stored.id, "created taxonomy record");
        Ok(stored)
    }

    pub async fn find(&self, id: &str) -> RepositoryResult<TaxonomyRecord> {
        self.store
            .fetch(id, self.scope)
            .await?
            .ok_or_else(|| self.not_found())
    }

    pub async fn find_with_trashed(&self, id: &str) -> RepositoryResult<TaxonomyRecord> {
        self.store
            .fetch(id, SoftDeleteScope::WithTrashed)
            .await?
            .ok_or_else(|| self.not_found())
    }

    pub async fn list(&self) -> RepositoryResult<Vec<TaxonomyRecord>> {
        self.store.fetch_all(self.scope).await
    }

    pub async fn list_with_trashed(&self) -> RepositoryResult<Vec<TaxonomyRecord>> {
        self.store.fetch_all(SoftDeleteScope::WithTrashed).await
    }

    /// Merges `changes` into an active record. An empty change set leaves
    /// `updated_at` untouched.
    pub async fn update(&self, id: &str, changes: &TaxonomyChanges) -> RepositoryResult<TaxonomyRecord> {
        if changes.is_empty() {
            return self.find(id).await;
        }

        let updated = self
            .store
            .update(id, changes, now())
            .await?
            .ok_or_else(|| self.not_found())?;
        debug!(kind = self.kind().label(), id, "updated taxonomy record");
        Ok(updated)
    }

    pub async fn soft_delete(&self, id: &str) -> RepositoryResult<()> {
        self.store
            .mark_deleted(id, now())
            .await?
            .ok_or_else(|| self.not_found())?;
        debug!(kind = self.kind().label(), id, "soft-deleted taxonomy record");
        Ok(())
    }

    /// Clears `deleted_at`. Restoring an active record is a no-op.
    pub async fn restore(&self, id: &str) -> RepositoryResult<TaxonomyRecord> {
        if let Some(restored) = self.store.clear_deleted(id, now()).await? {
            debug!(kind = self.kind().label(), id, "restored taxonomy record");
            return Ok(restored);
        }

        self.find_with_trashed(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::id::UuidGenerator;
    use crate::modules::taxonomy::memory::MemoryTaxonomyStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            format!("00000000-0000-4000-8000-{:012}", n)
        }
    }

    fn repository(kind: TaxonomyKind) -> TaxonomyRepository {
        TaxonomyRepository::new(
            Arc::new(MemoryTaxonomyStore::new(kind)),
            Arc::new(UuidGenerator),
        )
    }

    fn new_taxonomy(name: &str) -> NewTaxonomy {
        NewTaxonomy {
            name: name.to_string(),
            description: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let repo = repository(TaxonomyKind::Category);
        let record = repo.create(new_taxonomy("Test")).await.unwrap();

        assert_eq!(record.id.len(), 36);
        assert_eq!(record.name, "Test");
        assert_eq!(record.description, None);
        assert!(record.is_active);
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.deleted_at, None);
    }

    #[tokio::test]
    async fn create_keeps_explicit_values() {
        let repo = repository(TaxonomyKind::Category);
        let record = repo
            .create(NewTaxonomy {
                name: "Test".to_string(),
                description: Some("desc".to_string()),
                is_active: Some(false),
            })
            .await
            .unwrap();

        assert_eq!(record.description.as_deref(), Some("desc"));
        assert!(!record.is_active);
    }

    #[tokio::test]
    async fn genres_drop_descriptions() {
        let repo = repository(TaxonomyKind::Genre);
        let record = repo
            .create(NewTaxonomy {
                name: "Action".to_string(),
                description: Some("ignored".to_string()),
                is_active: None,
            })
            .await
            .unwrap();
        assert_eq!(record.description, None);
    }

    #[tokio::test]
    async fn ids_come_from_the_injected_generator() {
        let repo = TaxonomyRepository::new(
            Arc::new(MemoryTaxonomyStore::new(TaxonomyKind::Genre)),
            Arc::new(SequentialIds(AtomicUsize::new(7))),
        );
        let record = repo.create(new_taxonomy("Comedy")).await.unwrap();
        assert_eq!(record.id, "00000000-0000-4000-8000-000000000007");
    }

    #[tokio::test]
    async fn update_merges_present_fields() {
        let repo = repository(TaxonomyKind::Category);
        let created = repo
            .create(NewTaxonomy {
                name: "Test".to_string(),
                description: Some("test_description".to_string()),
                is_active: Some(true),
            })
            .await
            .unwrap();

        let updated = repo
            .update(
                &created.id,
                &TaxonomyChanges {
                    name: Some("test_updated".to_string()),
                    description: Some(None),
                    is_active: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "test_updated");
        assert_eq!(updated.description, None);
        assert!(updated.is_active);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.find(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn empty_update_returns_the_record_unchanged() {
        let repo = repository(TaxonomyKind::Genre);
        let created = repo.create(new_taxonomy("Drama")).await.unwrap();
        let same = repo
            .update(&created.id, &TaxonomyChanges::default())
            .await
            .unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let repo = repository(TaxonomyKind::Genre);
        let changes = TaxonomyChanges {
            name: Some("x".to_string()),
            ..Default::default()
        };
        let err = repo.update("missing", &changes).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(TaxonomyKind::Genre)));
    }

    #[tokio::test]
    async fn soft_delete_hides_and_restore_brings_back() {
        let repo = repository(TaxonomyKind::Category);
        let created = repo
            .create(NewTaxonomy {
                name: "Kids".to_string(),
                description: Some("family".to_string()),
                is_active: Some(false),
            })
            .await
            .unwrap();

        repo.soft_delete(&created.id).await.unwrap();
        assert!(matches!(
            repo.find(&created.id).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(repo.list().await.unwrap().is_empty());

        let trashed = repo.find_with_trashed(&created.id).await.unwrap();
        assert!(trashed.is_trashed());

        let restored = repo.restore(&created.id).await.unwrap();
        assert_eq!(restored.deleted_at, None);
        assert_eq!(restored.name, "Kids");
        assert_eq!(restored.description.as_deref(), Some("family"));
        assert!(!restored.is_active);
        assert_eq!(repo.find(&created.id).await.unwrap(), restored);
    }

    #[tokio::test]
    async fn soft_delete_twice_is_not_found() {
        let repo = repository(TaxonomyKind::Genre);
        let created = repo.create(new_taxonomy("Thriller")).await.unwrap();
        repo.soft_delete(&created.id).await.unwrap();
        assert!(repo.soft_delete(&created.id).await.is_err());
    }

    #[tokio::test]
    async fn restoring_an_active_record_is_a_no_op() {
        let repo = repository(TaxonomyKind::Genre);
        let created = repo.create(new_taxonomy("Western")).await.unwrap();
        let restored = repo.restore(&created.id).await.unwrap();
        assert_eq!(restored, created);
    }

    #[tokio::test]
    async fn restoring_an_unknown_id_is_not_found() {
        let repo = repository(TaxonomyKind::Category);
        assert!(matches!(
            repo.restore("missing").await,
            Err(RepositoryError::NotFound(TaxonomyKind::Category))
        ));
    }

    #[tokio::test]
    async fn list_counts_only_active_records() {
        let repo = repository(TaxonomyKind::Category);
        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d"] {
            ids.push(repo.create(new_taxonomy(name)).await.unwrap().id);
        }
        repo.soft_delete(&ids[1]).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["a", "c", "d"]);
        assert_eq!(repo.list_with_trashed().await.unwrap().len(), 4);
    }
}
