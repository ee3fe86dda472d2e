use std::borrow::Cow;

use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

use super::model::{TaxonomyChanges, TaxonomyKind};

pub const MAX_STRING_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Checks a raw create/update payload against the taxonomy field rules.
///
/// Every field is checked; all violations come back together. Keys other
/// than `name`, `description` (categories only) and `is_active` are ignored.
pub fn validate(
    kind: TaxonomyKind,
    payload: &Map<String, Value>,
    mode: ValidationMode,
) -> Result<TaxonomyChanges, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut changes = TaxonomyChanges::default();

    match payload.get("name") {
        None if mode == ValidationMode::Create => errors.add("name", ValidationError::new("required")),
        None => {}
        Some(value) => match bounded_string(value) {
            Ok(Some(name)) => changes.name = Some(name),
            Ok(None) => errors.add("name", ValidationError::new("required")),
            Err(err) => errors.add("name", err),
        },
    }

    if kind.has_description() {
        if let Some(value) = payload.get("description") {
            match bounded_string(value) {
                Ok(description) => changes.description = Some(description),
                Err(err) => errors.add("description", err),
            }
        }
    }

    if let Some(value) = payload.get("is_active") {
        match coerce_boolean(value) {
            Some(is_active) => changes.is_active = Some(is_active),
            None => errors.add("is_active", ValidationError::new("boolean")),
        }
    }

    if errors.errors().is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

/// Trimmed string no longer than [`MAX_STRING_LENGTH`] characters. Null and
/// blank strings read as `None`.
fn bounded_string(value: &Value) -> Result<Option<String>, ValidationError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.trim(),
        _ => return Err(ValidationError::new("string")),
    };

    if text.is_empty() {
        return Ok(None);
    }
    if text.chars().count() > MAX_STRING_LENGTH {
        let mut err = ValidationError::new("max.string");
        err.add_param(Cow::from("max"), &MAX_STRING_LENGTH);
        return Err(err);
    }
    Ok(Some(text.to_string()))
}

fn coerce_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "0" | "false" => Some(false),
            "1" | "true" => Some(true),
            _ => None,
        },
        _ => None,
    }
}
