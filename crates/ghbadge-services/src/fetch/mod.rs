//! Generic "fetch JSON, map status codes, validate shape" primitive

pub mod error;
pub mod http_errors;
pub mod request;
pub mod validators;

pub use error::{FetchError, FetchResult};
pub use http_errors::{HttpErrors, check_status};
pub use request::{JsonFetcher, JsonRequest, request_json};
