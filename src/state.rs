use std::sync::Arc;

use crate::common::id::{IdGenerator, UuidGenerator};
use crate::infrastructure::db::pool::DbPool;
use crate::modules::taxonomy::memory::MemoryTaxonomyStore;
use crate::modules::taxonomy::model::TaxonomyKind;
use crate::modules::taxonomy::postgres::PgTaxonomyStore;
use crate::modules::taxonomy::repository::TaxonomyRepository;
use crate::modules::taxonomy::service::TaxonomyService;
use crate::modules::taxonomy::store::TaxonomyStore;

#[derive(Clone)]
pub struct AppState {
    pub categories: TaxonomyService,
    pub genres: TaxonomyService,
}

impl AppState {
    pub fn new(categories: TaxonomyService, genres: TaxonomyService) -> Self {
        Self { categories, genres }
    }

    pub fn from_stores(
        categories: Arc<dyn TaxonomyStore>,
        genres: Arc<dyn TaxonomyStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self::new(
            TaxonomyService::new(TaxonomyRepository::new(categories, ids.clone())),
            TaxonomyService::new(TaxonomyRepository::new(genres, ids)),
        )
    }

    pub fn postgres(db: DbPool) -> Self {
        Self::from_stores(
            Arc::new(PgTaxonomyStore::new(db.clone(), TaxonomyKind::Category)),
            Arc::new(PgTaxonomyStore::new(db, TaxonomyKind::Genre)),
            Arc::new(UuidGenerator),
        )
    }

    pub fn in_memory() -> Self {
        Self::from_stores(
            Arc::new(MemoryTaxonomyStore::new(TaxonomyKind::Category)),
            Arc::new(MemoryTaxonomyStore::new(TaxonomyKind::Genre)),
            Arc::new(UuidGenerator),
        )
    }
}
