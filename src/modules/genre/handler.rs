use super::dto::{GenreRequest, GenreResponse};
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

/// List all genres
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    params(ListQuery),
    responses(
        (status = 200, description = "List of genres", body = Vec<GenreResponse>),
        (status = 400, description = "Malformed query string", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn list_genres(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListQuery>,
) -> Result<Json<Vec<GenreResponse>>> {
    let genres = state.genres.list(query.with_trashed).await?;
    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/api/v1/genres",
    request_body = GenreRequest,
    responses(
        (status = 201, description = "Genre created", body = GenreResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 413, description = "Body too large", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<impl IntoResponse> {
    let genre = state.genres.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(GenreResponse::from(genre))))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = String, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = GenreResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GenreResponse>> {
    let genre = state.genres.find(&id).await?;
    Ok(Json(genre.into()))
}

/// Update genre
#[utoipa::path(
    put,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = String, Path, description = "Genre ID")
    ),
    request_body = GenreRequest,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<GenreResponse>> {
    let genre = state.genres.update(&id, &payload).await?;
    Ok(Json(genre.into()))
}

/// Delete genre
#[utoipa::path(
    delete,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = String, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.genres.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Restore a soft-deleted genre
#[utoipa::path(
    post,
    path = "/api/v1/genres/{id}/restore",
    params(
        ("id" = String, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre restored", body = GenreResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn restore_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GenreResponse>> {
    let genre = state.genres.restore(&id).await?;
    Ok(Json(genre.into()))
}
