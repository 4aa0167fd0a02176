//! GraphQL client implementation for the Crystallize PIM API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries and unwrapping the `data` field of the response.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Credentials;
use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpResponse};
use crate::config::OnboardConfig;

/// The JSON body of a GraphQL request.
///
/// # Example
///
/// ```rust
/// use crystallize_onboard::clients::graphql::GraphqlRequest;
/// use serde_json::json;
///
/// let request = GraphqlRequest::new("query { me { id } }", json!({}));
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["query"], "query { me { id } }");
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    /// The GraphQL document.
    pub query: &'a str,
    /// Variables for the document.
    pub variables: serde_json::Value,
}

impl<'a> GraphqlRequest<'a> {
    /// Creates a request payload.
    #[must_use]
    pub const fn new(query: &'a str, variables: serde_json::Value) -> Self {
        Self { query, variables }
    }
}

/// GraphQL API client for the Crystallize PIM API.
///
/// Each call is a single `POST` with the query and variables as JSON. The
/// credential pair is checked before anything is sent, and the response must
/// carry a `data` field; otherwise the whole payload is returned as
/// [`GraphqlError::MissingData`].
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use crystallize_onboard::auth::Credentials;
/// use crystallize_onboard::clients::GraphqlClient;
/// use serde_json::json;
///
/// let credentials = Credentials::new("token-id", "token-secret");
/// let client = GraphqlClient::new(&credentials, None)?;
///
/// let data = client
///     .query_raw("query { me { email } }", json!({}))
///     .await?;
/// println!("Signed in as {}", data["me"]["email"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The credential pair, kept for the pre-flight check.
    credentials: Credentials,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given credentials.
    ///
    /// Blank credentials are accepted here and rejected on the first query.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The access token pair sent with each request
    /// * `config` - Optional configuration for the endpoint and user agent
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn new(
        credentials: &Credentials,
        config: Option<&OnboardConfig>,
    ) -> Result<Self, GraphqlError> {
        Ok(Self {
            http_client: HttpClient::new(credentials, config)?,
            credentials: credentials.clone(),
        })
    }

    /// Returns the endpoint queries are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Returns the credentials this client authenticates with.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Executes a query and deserializes its `data` field into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`query_raw`](Self::query_raw) returns, plus
    /// [`GraphqlError::UnexpectedData`] if `data` does not match `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, GraphqlError> {
        let data = self.query_raw(query, variables).await?;
        serde_json::from_value(data).map_err(GraphqlError::UnexpectedData)
    }

    /// Executes a query and returns its `data` field as JSON.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::MissingCredentials`] if either half of the credential
    ///   pair is blank (no request is sent)
    /// - [`GraphqlError::Http`] for network errors and non-2xx responses
    /// - [`GraphqlError::InvalidJson`] if the body is not JSON
    /// - [`GraphqlError::MissingData`] if the payload has no (or a null) `data`
    pub async fn query_raw(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GraphqlError> {
        if let Some(field) = self.credentials.missing_field() {
            return Err(GraphqlError::MissingCredentials { field });
        }

        let request = GraphqlRequest::new(query, variables);
        let body = serde_json::to_value(&request).map_err(GraphqlError::UnexpectedData)?;
        let response = self.http_client.post_json(&body).await?;

        Self::extract_data(response)
    }

    fn extract_data(response: HttpResponse) -> Result<serde_json::Value, GraphqlError> {
        let mut payload = response
            .json()
            .map_err(|source| GraphqlError::InvalidJson {
                body: response.body.clone(),
                source,
            })?;

        match payload.get_mut("data").map(serde_json::Value::take) {
            Some(data) if !data.is_null() => Ok(data),
            _ => {
                tracing::debug!("GraphQL response without data: {}", payload);
                Err(GraphqlError::MissingData { payload })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(body: &str) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_extract_data_returns_data_field() {
        let data =
            GraphqlClient::extract_data(response(r#"{"data":{"tenant":{"id":"t1"}}}"#)).unwrap();
        assert_eq!(data["tenant"]["id"], "t1");
    }

    #[test]
    fn test_extract_data_without_data_returns_payload() {
        let result = GraphqlClient::extract_data(response(
            r#"{"errors":[{"message":"Not authorized"}]}"#,
        ));
        match result {
            Err(GraphqlError::MissingData { payload }) => {
                assert_eq!(payload["errors"][0]["message"], "Not authorized");
            }
            other => panic!("Expected MissingData, got: {other:?}"),
        }
    }

    #[test]
    fn test_extract_data_treats_null_data_as_missing() {
        let result = GraphqlClient::extract_data(response(r#"{"data":null,"errors":[]}"#));
        assert!(matches!(result, Err(GraphqlError::MissingData { .. })));
    }

    #[test]
    fn test_extract_data_rejects_non_json() {
        let result = GraphqlClient::extract_data(response("Bad Gateway"));
        match result {
            Err(GraphqlError::InvalidJson { body, .. }) => assert_eq!(body, "Bad Gateway"),
            other => panic!("Expected InvalidJson, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_credentials_fail_before_sending() {
        // Unroutable endpoint: reaching the network would produce an Http error instead.
        let config = OnboardConfig::builder()
            .api_url(crate::config::ApiUrl::new("http://127.0.0.1:9/graphql").unwrap())
            .build();
        let client = GraphqlClient::new(&Credentials::new("", ""), Some(&config)).unwrap();

        let result = client.query_raw("query { me { id } }", serde_json::json!({})).await;

        assert!(matches!(
            result,
            Err(GraphqlError::MissingCredentials { .. })
        ));
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }
}
