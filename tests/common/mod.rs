#![allow(dead_code)]

use std::borrow::Cow;
use std::collections::HashMap;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use catalog_backend::app::create_app;
use catalog_backend::modules::taxonomy::messages::{attribute_name, EnglishCatalog, MessageCatalog};
use catalog_backend::state::AppState;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use serde_json::{json, Value};

pub const CATEGORIES: &str = "/api/v1/categories";
pub const GENRES: &str = "/api/v1/genres";

pub fn test_server() -> TestServer {
    TestServer::new(create_app(AppState::in_memory())).expect("failed to start test server")
}

pub fn item_route(route: &str, id: &str) -> String {
    format!("{}/{}", route, id)
}

pub fn category_fixture() -> Value {
    json!({
        "name": Word().fake::<String>(),
        "description": Sentence(1..4).fake::<String>(),
        "is_active": true
    })
}

pub fn genre_fixture() -> Value {
    json!({
        "name": Word().fake::<String>(),
        "is_active": true
    })
}

/// Creates a record through the API and returns its JSON.
pub async fn create(server: &TestServer, route: &str, payload: Value) -> Value {
    let response = server.post(route).json(&payload).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

pub fn expected_message(rule: &str, field: &str, params: &[(&'static str, Value)]) -> String {
    let params: HashMap<Cow<'static, str>, Value> = params
        .iter()
        .map(|(name, value)| (Cow::Borrowed(*name), value.clone()))
        .collect();
    EnglishCatalog.message(rule, &attribute_name(field), &params)
}

/// 422 with a `rule` message for each of `fields`.
pub fn assert_invalidation_fields(
    response: &TestResponse,
    fields: &[&str],
    rule: &str,
    params: &[(&'static str, Value)],
) {
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "The given data was invalid.");

    for field in fields {
        let messages = body["errors"][*field]
            .as_array()
            .unwrap_or_else(|| panic!("no errors reported for {field}: {body}"));
        let expected = expected_message(rule, field, params);
        assert!(
            messages.iter().any(|m| m.as_str() == Some(expected.as_str())),
            "expected {expected:?} for {field}, got {messages:?}"
        );
    }
}

pub fn assert_missing_validation_errors(response: &TestResponse, fields: &[&str]) {
    let body = response.json::<Value>();
    for field in fields {
        assert!(
            body["errors"].get(*field).is_none(),
            "unexpected errors for {field}: {body}"
        );
    }
}

fn keys(data: &Value) -> Vec<String> {
    data.as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

pub async fn assert_invalidation_in_store(
    server: &TestServer,
    route: &str,
    data: Value,
    rule: &str,
    params: &[(&'static str, Value)],
) {
    let response = server.post(route).json(&data).await;
    let fields = keys(&data);
    let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
    assert_invalidation_fields(&response, &fields, rule, params);
}

pub async fn assert_invalidation_in_update(
    server: &TestServer,
    item: &str,
    data: Value,
    rule: &str,
    params: &[(&'static str, Value)],
) {
    let response = server.put(item).json(&data).await;
    let fields = keys(&data);
    let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
    assert_invalidation_fields(&response, &fields, rule, params);
}

/// Stored JSON must carry every key/value of `expected`.
pub fn assert_json_fragment(actual: &Value, expected: &Value) {
    for (key, value) in expected.as_object().expect("fragment must be an object") {
        assert_eq!(&actual[key], value, "mismatch on {key} in {actual}");
    }
}
