//! HTTP surface of ghbadge
//!
//! Mounts every badge service from its static definition, attaches a
//! correlation ID to each request and renders failures as error badges.

pub mod bootstrap;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use middleware::{RequestContext, correlation_id_middleware};
pub use state::AppState;
