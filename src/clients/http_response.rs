//! HTTP response type.
//!
//! This module provides the [`HttpResponse`] type returned by
//! [`HttpClient`](crate::clients::HttpClient).

use std::collections::HashMap;

/// A raw HTTP response from the API.
///
/// The body is kept as text so that the GraphQL layer can report a body that
/// is not JSON verbatim.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use crystallize_onboard::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"data":{}}"#.to_string());
/// assert!(response.is_ok());
/// assert!(response.json().unwrap().get("data").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
