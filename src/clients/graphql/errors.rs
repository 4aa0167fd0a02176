//! GraphQL-specific error types.
//!
//! Every failure of a GraphQL call is returned to the caller; nothing in the
//! client terminates the process.
//!
//! - [`GraphqlError::MissingCredentials`]: Rejected before any network I/O
//! - [`GraphqlError::Http`]: Wraps underlying HTTP errors
//! - [`GraphqlError::InvalidJson`]: The body could not be parsed
//! - [`GraphqlError::MissingData`]: The payload has no `data` field
//! - [`GraphqlError::UnexpectedData`]: `data` does not match the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use crystallize_onboard::clients::graphql::GraphqlError;
//!
//! match client.query_raw("query { me { id } }", json!({})).await {
//!     Ok(data) => println!("Data: {data}"),
//!     Err(GraphqlError::MissingData { payload }) => {
//!         println!("API returned errors: {payload}");
//!     }
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::CredentialField;
use crate::clients::HttpError;

/// Error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The credential pair is incomplete; no request was sent.
    #[error("Missing {field}. Set CRYSTALLIZE_ACCESS_TOKEN_ID and CRYSTALLIZE_ACCESS_TOKEN_SECRET or enter them when prompted.")]
    MissingCredentials {
        /// The half of the pair that is blank.
        field: CredentialField,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body is not JSON.
    #[error("Response is not valid JSON: {body}")]
    InvalidJson {
        /// The raw response body.
        body: String,
        /// The parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The response has no `data` field; the whole payload is the error.
    #[error("GraphQL request failed: {payload}")]
    MissingData {
        /// The full response payload, usually carrying `errors`.
        payload: serde_json::Value,
    },

    /// `data` is present but could not be deserialized.
    #[error("Unexpected GraphQL data: {0}")]
    UnexpectedData(#[source] serde_json::Error),
}
