use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;
use validator::ValidationErrors;

use crate::common::response::FieldMessages;

/// Locale lookup turning `(rule, attribute, params)` into a message.
pub trait MessageCatalog: Send + Sync {
    fn message(&self, rule: &str, attribute: &str, params: &HashMap<Cow<'static, str>, Value>) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishCatalog;

impl EnglishCatalog {
    fn template(rule: &str) -> &'static str {
        match rule {
            "required" => "The :attribute field is required.",
            "max.string" => "The :attribute may not be greater than :max characters.",
            "boolean" => "The :attribute field must be true or false.",
            "string" => "The :attribute must be a string.",
            _ => "The :attribute is invalid.",
        }
    }
}

impl MessageCatalog for EnglishCatalog {
    fn message(&self, rule: &str, attribute: &str, params: &HashMap<Cow<'static, str>, Value>) -> String {
        let mut message = Self::template(rule).replace(":attribute", attribute);
        for (name, value) in params {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            message = message.replace(&format!(":{}", name), &rendered);
        }
        message
    }
}

/// Human-readable attribute name: `is_active` reads as `is active`.
pub fn attribute_name(field: &str) -> String {
    field.replace('_', " ")
}

/// Renders every field error through `catalog`, keyed by field.
pub fn render(errors: &ValidationErrors, catalog: &dyn MessageCatalog) -> FieldMessages {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let attribute = attribute_name(&field);
            let messages = errs
                .iter()
                .map(|err| catalog.message(&err.code, &attribute, &err.params))
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
