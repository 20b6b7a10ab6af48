//! Request correlation middleware
//!
//! Every request gets a [`CorrelationId`]: the caller's `X-Correlation-ID`
//! header when it is a valid UUID, a fresh one otherwise. Handlers read it
//! from the [`RequestContext`] extension and the same ID is echoed on the
//! response.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use ghbadge_common::CorrelationId;
use tracing::debug;

/// Header carrying the correlation ID in both directions
pub static CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// Per-request data made available to handlers
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: CorrelationId,
}

impl RequestContext {
    /// Correlation ID of `context`, or a fresh one when the middleware did not run
    pub fn correlation_id_or_new(context: Option<&Self>) -> CorrelationId {
        context.map_or_else(CorrelationId::new, |ctx| ctx.correlation_id.clone())
    }
}

/// Attach a [`RequestContext`] to the request and echo its ID on the response
pub async fn correlation_id_middleware(mut request: Request, next: Next) -> Response {
    let correlation_id = request
        .headers()
        .get(&CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(CorrelationId::parse)
        .unwrap_or_default();

    debug!(
        correlation_id = %correlation_id,
        method = %request.method(),
        path = request.uri().path(),
        "Request received"
    );

    request.extensions_mut().insert(RequestContext {
        correlation_id: correlation_id.clone(),
    });

    let mut response = next.run(request).await;

    if response.headers().contains_key(&CORRELATION_ID_HEADER) {
        return response;
    }

    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response
            .headers_mut()
            .insert(CORRELATION_ID_HEADER.clone(), value);
    }

    response
}
