use sqlx::FromRow;
use time::OffsetDateTime;

/// The taxonomy resources served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomyKind {
    Category,
    Genre,
}

impl TaxonomyKind {
    pub fn table(self) -> &'static str {
        match self {
            TaxonomyKind::Category => "categories",
            TaxonomyKind::Genre => "genres",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaxonomyKind::Category => "Category",
            TaxonomyKind::Genre => "Genre",
        }
    }

    /// Only categories carry a free-text description.
    pub fn has_description(self) -> bool {
        matches!(self, TaxonomyKind::Category)
    }
}

/// A stored category or genre row. Genres always have `description: None`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TaxonomyRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

impl TaxonomyRecord {
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Validated fields for a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaxonomy {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Validated partial update. `None` leaves the stored value untouched;
/// `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxonomyChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl TaxonomyChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.is_active.is_none()
    }

    /// Converts create-mode output into a [`NewTaxonomy`]. Create-mode
    /// validation guarantees `name` is present.
    pub fn into_new(self) -> NewTaxonomy {
        NewTaxonomy {
            name: self.name.unwrap_or_default(),
            description: self.description.flatten(),
            is_active: self.is_active,
        }
    }

    pub fn apply_to(&self, record: &mut TaxonomyRecord, now: OffsetDateTime) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
        record.updated_at = now;
    }
}

/// Current time truncated to microseconds, the precision PostgreSQL keeps.
pub fn now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_microsecond(now.microsecond()).unwrap_or(now)
}
