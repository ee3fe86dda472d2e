use super::dto::{CategoryRequest, CategoryResponse};
use crate::common::error::Result;
use crate::common::extractor::{JsonPayload, QueryParams};
use crate::common::response::ErrorResponse;
use crate::modules::taxonomy::dto::ListQuery;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(ListQuery),
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponse>),
        (status = 400, description = "Malformed query string", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListQuery>,
) -> Result<Json<Vec<CategoryResponse>>> {
    let categories = state.categories.list(query.with_trashed).await?;
    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 413, description = "Body too large", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<impl IntoResponse> {
    let category = state.categories.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>> {
    let category = state.categories.find(&id).await?;
    Ok(Json(category.into()))
}

/// Update category
#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<CategoryResponse>> {
    let category = state.categories.update(&id, &payload).await?;
    Ok(Json(category.into()))
}

/// Soft-delete category
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.categories.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Restore a soft-deleted category
#[utoipa::path(
    post,
    path = "/api/v1/categories/{id}/restore",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category restored", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn restore_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>> {
    let category = state.categories.restore(&id).await?;
    Ok(Json(category.into()))
}
