//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users};
use crate::{error::ErrorResponse, models};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VirtualBook API",
        version = "1.0.0",
        description = "Personal Virtual Library REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::list_users,
        users::register,
        users::login,
        users::logout,
        // Books
        books::list_books,
        books::get_book,
        books::add_book,
        books::update_book,
        books::delete_book,
    ),
    components(schemas(
        ErrorResponse,
        crate::api::MessageResponse,
        health::HealthResponse,
        users::LoginResponse,
        models::user::RegisterUser,
        models::user::LoginUser,
        models::user::UserResponse,
        models::user::UserSummary,
        models::book::Book,
        models::book::BookPayload,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "users", description = "Registration and authentication"),
        (name = "books", description = "Per-user book collections")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
