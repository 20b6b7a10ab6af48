pub mod code_search;
pub mod health;
pub mod services;

use crate::AppState;
use axum::{Router, middleware, routing::MethodRouter};
use ghbadge_config::ApiConfig;
use ghbadge_services::{GithubCodeSearch, ServiceDefinition};
use tracing::info;

/// Every badge service this server mounts, in registration order
pub const REGISTERED_SERVICES: &[ServiceDefinition] = &[GithubCodeSearch::DEFINITION];

/// Mount `handler` at the route described by `definition`
pub fn register<S>(
    router: Router<S>,
    definition: &ServiceDefinition,
    handler: MethodRouter<S>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let path = definition.route.path();
    info!(
        service = definition.name,
        category = definition.category,
        path = %path,
        required_params = ?definition.route.required_params().collect::<Vec<_>>(),
        "Registering badge service"
    );
    router.route(&path, handler)
}

pub fn create_router(state: AppState, config: &ApiConfig) -> Router {
    let badges = register(
        Router::new(),
        &GithubCodeSearch::DEFINITION,
        axum::routing::get(code_search::code_search_handler),
    );

    let mut router: Router = badges
        .with_state(state)
        .merge(health::routes())
        .merge(services::routes());

    if config.enable_docs {
        router = router
            .merge(crate::openapi::routes()) // OpenAPI JSON endpoint
            .merge(crate::openapi::swagger_ui()); // Swagger UI
    }

    // Add correlation ID middleware to all routes
    router.layer(middleware::from_fn(
        crate::middleware::correlation_id_middleware,
    ))
}
