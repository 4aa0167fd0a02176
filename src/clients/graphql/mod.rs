//! GraphQL API client for the Crystallize PIM API.
//!
//! This module provides the client every remote lookup goes through.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes queries with `query()` and `query_raw()`
//! - [`GraphqlRequest`]: The `{query, variables}` request body
//! - [`GraphqlError`]: Error type for GraphQL API operations
//!
//! # Response Handling
//!
//! A successful call returns the `data` field of the response. A response
//! without `data` is treated as a failure in its entirety, so GraphQL
//! `errors` surface as [`GraphqlError::MissingData`] carrying the raw
//! payload.
//!
//! # Retry Behavior
//!
//! None. Each query is sent once.

mod client;
mod errors;

pub use client::{GraphqlClient, GraphqlRequest};
pub use errors::GraphqlError;
