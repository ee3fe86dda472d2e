use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handler;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_categories).post(handler::create_category))
        .route(
            "/{id}",
            get(handler::get_category)
                .put(handler::update_category)
                .patch(handler::update_category)
                .delete(handler::delete_category),
        )
        .route("/{id}/restore", post(handler::restore_category))
}
