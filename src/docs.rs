use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::category::handler::list_categories,
        crate::modules::category::handler::create_category,
        crate::modules::category::handler::get_category,
        crate::modules::category::handler::update_category,
        crate::modules::category::handler::delete_category,
        crate::modules::category::handler::restore_category,
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::genre::handler::restore_genre,
    ),
    components(
        schemas(
            crate::common::response::ErrorResponse,
            crate::modules::category::dto::CategoryRequest,
            crate::modules::category::dto::CategoryResponse,
            crate::modules::genre::dto::GenreRequest,
            crate::modules::genre::dto::GenreResponse,
        )
    ),
    tags(
        (name = "Categories", description = "Video category taxonomy"),
        (name = "Genres", description = "Video genre taxonomy")
    )
)]
pub struct ApiDoc;
