//! `GET /github/code-search` badge route
//!
//! ```text
//! GET /github/code-search?query=goto%20language:javascript%20NOT%20is:fork
//! ```
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "label": "goto language:javascript NOT is:fork counter",
//!   "message": "42",
//!   "color": "blue"
//! }
//! ```

use crate::middleware::RequestContext;
use crate::{ApiError, ApiResult, AppState};
use axum::{
    Json,
    extract::{Extension, Query, State, rejection::QueryRejection},
};
use ghbadge_services::{Badge, GithubCodeSearch};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use utoipa::IntoParams;

const QUERY_PARAM: &str = "query";

/// Query string of the code search badge
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CodeSearchParams {
    /// GitHub code search expression, passed to GitHub unchanged
    #[param(required = true, example = "goto language:javascript NOT is:fork NOT is:archived")]
    pub query: Option<String>,
}

/// Code search counter badge; OpenAPI text comes from the service definition
#[utoipa::path(
    get,
    path = "/github/code-search",
    tag = "analysis",
    summary = GithubCodeSearch::DEFINITION.docs.summary,
    description = GithubCodeSearch::DEFINITION.docs.description,
    params(CodeSearchParams),
    responses(
        (status = 200, description = "Code search counter badge, or an error badge", body = Badge)
    )
)]
#[instrument(skip(state, context, params), fields(correlation_id))]
pub async fn code_search_handler(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    params: Result<Query<CodeSearchParams>, QueryRejection>,
) -> ApiResult<Json<Badge>> {
    let correlation_id = RequestContext::correlation_id_or_new(context.as_deref());
    tracing::Span::current().record("correlation_id", correlation_id.to_string());

    let label = GithubCodeSearch::DEFINITION.default_badge.label;

    let query = match params {
        Ok(Query(params)) => params.query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                reason = %rejection.body_text(),
                "Unparseable query string"
            );
            None
        }
    };

    let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
        return Err(ApiError::InvalidParameter {
            name: QUERY_PARAM,
            label,
            correlation_id,
        });
    };

    info!(
        correlation_id = %correlation_id,
        query = %query,
        "Processing code search badge request"
    );

    let badge = state
        .code_search
        .handle(&query)
        .await
        .map_err(|e| ApiError::upstream(e, label, correlation_id.clone()))?;

    info!(
        correlation_id = %correlation_id,
        message = %badge.message,
        "Code search badge rendered"
    );

    Ok(Json(badge))
}
