//! `OpenAPI` documentation generation and Swagger UI setup

use axum::{Json, Router, response::IntoResponse, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// `OpenAPI` documentation for the ghbadge API
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::code_search::code_search_handler),
    components(schemas(ghbadge_services::Badge)),
    tags(
        (name = "analysis", description = "Code analysis badges"),
    ),
    info(
        title = "ghbadge API",
        version = "0.1.0",
        description = "Badge endpoints backed by the GitHub REST API",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// Raw `OpenAPI` document at `/openapi.json`
pub fn routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// Returns configured Swagger UI service, which also serves `/api-docs/openapi.json`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

/// Returns `OpenAPI` JSON as a response
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
