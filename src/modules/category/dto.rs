use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::modules::taxonomy::model::TaxonomyRecord;

/// Accepted request shape. Bodies are validated field by field, so every
/// key is optional at the wire level.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    /// Required on create, at most 255 characters.
    pub name: Option<String>,
    /// At most 255 characters; an empty string clears it.
    pub description: Option<String>,
    /// Defaults to true.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
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

impl From<TaxonomyRecord> for CategoryResponse {
    fn from(c: TaxonomyRecord) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
            deleted_at: c.deleted_at,
        }
    }
}
