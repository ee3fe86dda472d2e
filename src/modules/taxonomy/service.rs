use std::sync::Arc;

use serde_json::{Map, Value};

use super::messages::{self, EnglishCatalog, MessageCatalog};
use super::model::{TaxonomyKind, TaxonomyRecord};
use super::repository::TaxonomyRepository;
use super::validator::{validate, ValidationMode};
use crate::common::error::{AppError, Result};

/// Request-level operations shared by the category and genre endpoints.
#[derive(Clone)]
pub struct TaxonomyService {
    repository: TaxonomyRepository,
    messages: Arc<dyn MessageCatalog>,
}

impl TaxonomyService {
    pub fn new(repository: TaxonomyRepository) -> Self {
        Self::with_catalog(repository, Arc::new(EnglishCatalog))
    }

    pub fn with_catalog(repository: TaxonomyRepository, messages: Arc<dyn MessageCatalog>) -> Self {
        Self { repository, messages }
    }

    pub fn kind(&self) -> TaxonomyKind {
        self.repository.kind()
    }

    pub async fn list(&self, with_trashed: bool) -> Result<Vec<TaxonomyRecord>> {
        let records = if with_trashed {
            self.repository.list_with_trashed().await?
        } else {
            self.repository.list().await?
        };
        Ok(records)
    }

    pub async fn find(&self, id: &str) -> Result<TaxonomyRecord> {
        Ok(self.repository.find(id).await?)
    }

    pub async fn create(&self, payload: &Map<String, Value>) -> Result<TaxonomyRecord> {
        let changes = validate(self.kind(), payload, ValidationMode::Create)
            .map_err(|errors| AppError::Validation(messages::render(&errors, self.messages.as_ref())))?;

        Ok(self.repository.create(changes.into_new()).await?)
    }

    /// Looks the record up before validating so unknown ids answer 404
    /// regardless of the payload.
    pub async fn update(&self, id: &str, payload: &Map<String, Value>) -> Result<TaxonomyRecord> {
        let existing = self.repository.find(id).await?;

        let changes = validate(self.kind(), payload, ValidationMode::Update)
            .map_err(|errors| AppError::Validation(messages::render(&errors, self.messages.as_ref())))?;

        Ok(self.repository.update(&existing.id, &changes).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        Ok(self.repository.soft_delete(id).await?)
    }

    pub async fn restore(&self, id: &str) -> Result<TaxonomyRecord> {
        Ok(self.repository.restore(id).await?)
    }
}
