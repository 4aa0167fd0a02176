//! HTTP client types for Crystallize API communication.
//!
//! This module provides the transport layer for authenticated requests to
//! the Crystallize PIM API.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client posting JSON to the endpoint
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpError`]: Transport and status errors
//! - [`graphql::GraphqlClient`]: GraphQL client returning the `data` field
//! - [`graphql::GraphqlError`]: GraphQL-specific error types

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlRequest};
