use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::debug;

use super::model::{TaxonomyChanges, TaxonomyKind, TaxonomyRecord};
use super::store::{RepositoryResult, SoftDeleteScope, TaxonomyStore};

/// sqlx-backed store for one taxonomy table.
///
/// Queries are built once per table since `genres` has no `description`
/// column; it is selected as a typed NULL so both tables map onto
/// [`TaxonomyRecord`].
pub struct PgTaxonomyStore {
    pool: PgPool,
    kind: TaxonomyKind,
    columns: String,
}

impl PgTaxonomyStore {
    pub fn new(pool: PgPool, kind: TaxonomyKind) -> Self {
        let description = if kind.has_description() {
            "description"
        } else {
            "NULL::VARCHAR AS description"
        };
        let columns = format!(
            "id, name, {}, is_active, created_at, updated_at, deleted_at",
            description
        );

        Self { pool, kind, columns }
    }

    fn table(&self) -> &'static str {
        self.kind.table()
    }
}

#[async_trait]
impl TaxonomyStore for PgTaxonomyStore {
    fn kind(&self) -> TaxonomyKind {
        self.kind
    }

    async fn insert(&self, record: &TaxonomyRecord) -> RepositoryResult<TaxonomyRecord> {
        let stored = if self.kind.has_description() {
            let sql = format!(
                r#"
                INSERT INTO {} (id, name, description, is_active, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING {}
                "#,
                self.table(),
                self.columns
            );
            sqlx::query_as::<_, TaxonomyRecord>(&sql)
                .bind(&record.id)
                .bind(&record.name)
                .bind(&record.description)
                .bind(record.is_active)
                .bind(record.created_at)
                .bind(record.updated_at)
                .fetch_one(&self.pool)
                .await?
        } else {
            let sql = format!(
                r#"
                INSERT INTO {} (id, name, is_active, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING {}
                "#,
                self.table(),
                self.columns
            );
            sqlx::query_as::<_, TaxonomyRecord>(&sql)
                .bind(&record.id)
                .bind(&record.name)
                .bind(record.is_active)
                .bind(record.created_at)
                .bind(record.updated_at)
                .fetch_one(&self.pool)
                .await?
        };

        debug!(table = self.table(), id = %stored.id, "inserted row");
        Ok(stored)
    }

    async fn fetch(&self, id: &str, scope: SoftDeleteScope) -> RepositoryResult<Option<TaxonomyRecord>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1 AND {}",
            self.columns,
            self.table(),
            scope.predicate()
        );
        let record = sqlx::query_as::<_, TaxonomyRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn fetch_all(&self, scope: SoftDeleteScope) -> RepositoryResult<Vec<TaxonomyRecord>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} ORDER BY created_at ASC, id ASC",
            self.columns,
            self.table(),
            scope.predicate()
        );
        let records = sqlx::query_as::<_, TaxonomyRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn update(
        &self,
        id: &str,
        changes: &TaxonomyChanges,
        now: OffsetDateTime,
    ) -> RepositoryResult<Option<TaxonomyRecord>> {
        // A single statement keeps the merge atomic; the CASE lets an
        // explicit null clear the description, which COALESCE cannot.
        let record = if self.kind.has_description() {
            let sql = format!(
                r#"
                UPDATE {}
                SET
                    name = COALESCE($2, name),
                    description = CASE WHEN $3::BOOLEAN THEN $4::VARCHAR ELSE description END,
                    is_active = COALESCE($5, is_active),
                    updated_at = $6
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING {}
                "#,
                self.table(),
                self.columns
            );
            sqlx::query_as::<_, TaxonomyRecord>(&sql)
                .bind(id)
                .bind(&changes.name)
                .bind(changes.description.is_some())
                .bind(changes.description.clone().flatten())
                .bind(changes.is_active)
                .bind(now)
                .fetch_optional(&self.pool)
                .await?
        } else {
            let sql = format!(
                r#"
                UPDATE {}
                SET
                    name = COALESCE($2, name),
                    is_active = COALESCE($3, is_active),
                    updated_at = $4
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING {}
                "#,
                self.table(),
                self.columns
            );
            sqlx::query_as::<_, TaxonomyRecord>(&sql)
                .bind(id)
                .bind(&changes.name)
                .bind(changes.is_active)
                .bind(now)
                .fetch_optional(&self.pool)
                .await?
        };

        if record.is_some() {
            debug!(table = self.table(), id, "updated row");
        }
        Ok(record)
    }

    async fn mark_deleted(&self, id: &str, now: OffsetDateTime) -> RepositoryResult<Option<TaxonomyRecord>> {
        let sql = format!(
            r#"
            UPDATE {}
            SET deleted_at = $2, updated_at = $2
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {}
            "#,
            self.table(),
            self.columns
        );
        let record = sqlx::query_as::<_, TaxonomyRecord>(&sql)
            .bind(id)
            .bind(now)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn clear_deleted(&self, id: &str, now: OffsetDateTime) -> RepositoryResult<Option<TaxonomyRecord>> {
        let sql = format!(
            r#"
            UPDATE {}
            SET deleted_at = NULL, updated_at = $2
            WHERE id = $1 AND deleted_at IS NOT NULL
            RETURNING {}
            "#,
            self.table(),
            self.columns
        );
        let record = sqlx::query_as::<_, TaxonomyRecord>(&sql)
            .bind(id)
            .bind(now)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }
}
