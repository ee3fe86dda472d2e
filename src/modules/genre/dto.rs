use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::modules::taxonomy::model::TaxonomyRecord;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenreRequest {
    /// Required on create, at most 255 characters.
    pub name: Option<String>,
    /// Defaults to true.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenreResponse {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub deleted_at: Option<OffsetDateTime>,
}

impl From<TaxonomyRecord> for GenreResponse {
    fn from(g: TaxonomyRecord) -> Self {
        Self {
            id: g.id,
            name: g.name,
            is_active: g.is_active,
            created_at: g.created_at,
            updated_at: g.updated_at,
            deleted_at: g.deleted_at,
        }
    }
}
