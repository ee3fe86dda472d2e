use uuid::Uuid;

/// Source of record identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh 36-character identifier.
    fn generate(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}
