//! Badge services for ghbadge
//!
//! A badge service turns a handful of query parameters into one upstream
//! request and one [`Badge`]. Services do not talk HTTP themselves; they are
//! handed a [`JsonFetcher`] and describe themselves with a static
//! [`ServiceDefinition`] that the API layer registers at startup.

pub mod badge;
pub mod definition;
pub mod fetch;
pub mod github;

pub use badge::{Badge, colors};
pub use definition::{DefaultBadgeData, QueryParamSpec, RouteSpec, ServiceDefinition, ServiceDocs};
pub use fetch::{
    FetchError, FetchResult, HttpErrors, JsonFetcher, JsonRequest, check_status, request_json,
};
pub use github::{CodeSearchResult, GithubClient, GithubCodeSearch};
