//! GitHub REST API services

pub mod client;
pub mod code_search;

pub use client::GithubClient;
pub use code_search::{CodeSearchResult, GithubCodeSearch};
