//! HTTP client for Crystallize API communication.
//!
//! This module provides the [`HttpClient`] type for sending authenticated
//! JSON requests to the single GraphQL endpoint.

use std::collections::HashMap;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiUrl, OnboardConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Crystallize API.
///
/// The client handles:
/// - Endpoint selection from configuration
/// - Default headers including User-Agent and the access token pair
/// - Response header parsing
///
/// Requests are attempted once. No timeout is configured.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client sending the given credentials.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The access token pair added to every request
    /// * `config` - Optional configuration for the endpoint and `user_agent_prefix`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crystallize_onboard::auth::Credentials;
    /// use crystallize_onboard::clients::HttpClient;
    ///
    /// let credentials = Credentials::new("id", "secret");
    /// let client = HttpClient::new(&credentials, None).unwrap();
    /// assert_eq!(client.endpoint(), "https://pim.crystallize.com/graphql");
    /// ```
    pub fn new(
        credentials: &Credentials,
        config: Option<&OnboardConfig>,
    ) -> Result<Self, HttpError> {
        let endpoint = config
            .map_or_else(ApiUrl::default, |c| c.api_url().clone())
            .to_string();

        let user_agent_prefix = config
            .and_then(OnboardConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}crystallize-onboard v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        for (name, value) in credentials.headers() {
            default_headers.insert(name.to_string(), value.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            endpoint,
            default_headers,
        })
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `body` as a JSON `POST` to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.body(body.to_string());

        tracing::debug!("POST {}", self.endpoint);
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        tracing::debug!("Received HTTP {} ({} bytes)", code, body_text.len());

        let response = HttpResponse::new(code, headers, body_text);
        if !response.is_ok() {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: response.body,
            }));
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
