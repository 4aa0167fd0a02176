//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated, human-readable tenant identifier (the tenant "slug").
///
/// Surrounding whitespace is trimmed; the identifier is otherwise kept as
/// typed, since tenant lookup is an exact string match.
///
/// # Example
///
/// ```rust
/// use crystallize_onboard::TenantIdentifier;
///
/// let identifier = TenantIdentifier::new("  furniture ").unwrap();
/// assert_eq!(identifier.as_ref(), "furniture");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TenantIdentifier(String);

impl TenantIdentifier {
    /// Creates a new validated tenant identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTenantIdentifier`] if the identifier is
    /// empty after trimming.
    pub fn new(identifier: impl Into<String>) -> Result<Self, ConfigError> {
        let identifier = identifier.into();
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ConfigError::EmptyTenantIdentifier);
        }
        Ok(Self(identifier.to_string()))
    }
}

impl AsRef<str> for TenantIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TenantIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TenantIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Crystallize access token id.
///
/// # Example
///
/// ```rust
/// use crystallize_onboard::AccessTokenId;
///
/// let id = AccessTokenId::new("my-token-id").unwrap();
/// assert_eq!(id.as_ref(), "my-token-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessTokenId(String);

impl AccessTokenId {
    /// Creates a new validated access token id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessTokenId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyAccessTokenId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AccessTokenId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Crystallize access token secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AccessTokenSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use crystallize_onboard::AccessTokenSecret;
///
/// let secret = AccessTokenSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AccessTokenSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessTokenSecret(String);

impl AccessTokenSecret {
    /// Creates a new validated access token secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessTokenSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyAccessTokenSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AccessTokenSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessTokenSecret(*****)")
    }
}

/// A validated GraphQL endpoint URL.
///
/// Only the scheme and host are checked; path and query are kept verbatim.
///
/// # Example
///
/// ```rust
/// use crystallize_onboard::ApiUrl;
///
/// let url = ApiUrl::new("https://pim.crystallize.com/graphql").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "pim.crystallize.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiUrl {
    /// The Crystallize PIM endpoint, [`DEFAULT_API_URL`](super::DEFAULT_API_URL).
    fn default() -> Self {
        let url = super::DEFAULT_API_URL;
        Self {
            url: url.to_string(),
            scheme_end: "https".len(),
            host_start: "https://".len(),
            host_end: "https://pim.crystallize.com".len(),
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_identifier_rejects_blank() {
        assert!(matches!(
            TenantIdentifier::new(""),
            Err(ConfigError::EmptyTenantIdentifier)
        ));
        assert!(matches!(
            TenantIdentifier::new("   "),
            Err(ConfigError::EmptyTenantIdentifier)
        ));
    }

    #[test]
    fn test_tenant_identifier_keeps_case() {
        let identifier = TenantIdentifier::new("MyShop").unwrap();
        assert_eq!(identifier.as_ref(), "MyShop");
        assert_eq!(identifier.to_string(), "MyShop");
    }

    #[test]
    fn test_access_token_id_rejects_empty_string() {
        let result = AccessTokenId::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAccessTokenId)));
    }

    #[test]
    fn test_access_token_secret_rejects_empty_string() {
        let result = AccessTokenSecret::new(" ");
        assert!(matches!(result, Err(ConfigError::EmptyAccessTokenSecret)));
    }

    #[test]
    fn test_access_token_secret_masks_value_in_debug() {
        let secret = AccessTokenSecret::new("super-secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "AccessTokenSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_api_url_validates_format() {
        let url = ApiUrl::new("https://pim.crystallize.com/graphql").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "pim.crystallize.com");

        let url = ApiUrl::new("http://127.0.0.1:4000/graphql").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        assert!(ApiUrl::new("pim.crystallize.com").is_err());
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("://example.com").is_err());
        assert!(ApiUrl::new("https:///graphql").is_err());
    }

    #[test]
    fn test_tenant_identifier_deserializes_with_validation() {
        let identifier: TenantIdentifier = serde_json::from_str(r#""demo""#).unwrap();
        assert_eq!(identifier.as_ref(), "demo");
        assert!(serde_json::from_str::<TenantIdentifier>(r#""""#).is_err());
    }
}
