//! Access token credentials for the Crystallize API.
//!
//! Requests are authenticated with a token id / token secret pair sent as
//! two custom headers.
//!
//! # Security
//!
//! The [`Credentials`] type implements a custom [`Debug`] that masks the
//! secret, preventing accidental exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use crystallize_onboard::auth::{Credentials, TOKEN_ID_HEADER, TOKEN_SECRET_HEADER};
//!
//! let credentials = Credentials::new("token-id", "token-secret");
//! assert!(credentials.missing_field().is_none());
//!
//! let headers = credentials.headers();
//! assert_eq!(headers[0], (TOKEN_ID_HEADER, "token-id"));
//! assert_eq!(headers[1], (TOKEN_SECRET_HEADER, "token-secret"));
//!
//! let debug_output = format!("{:?}", credentials);
//! assert!(!debug_output.contains("token-secret"));
//! ```

use std::fmt;

use crate::config::{AccessTokenId, AccessTokenSecret};

/// HTTP header carrying the access token id.
pub const TOKEN_ID_HEADER: &str = "X-Crystallize-Access-Token-Id";

/// HTTP header carrying the access token secret.
pub const TOKEN_SECRET_HEADER: &str = "X-Crystallize-Access-Token-Secret";

/// The half of the credential pair that is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialField {
    /// The access token id.
    TokenId,
    /// The access token secret.
    TokenSecret,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenId => f.write_str("access token id"),
            Self::TokenSecret => f.write_str("access token secret"),
        }
    }
}

/// An access token id / secret pair.
///
/// Unlike the validated [`AccessTokenId`] and [`AccessTokenSecret`]
/// newtypes, this type accepts any strings; completeness is checked by
/// [`missing_field`](Self::missing_field) before a request is sent.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token_id: String,
    token_secret: String,
}

impl Credentials {
    /// Creates a credential pair from raw strings.
    #[must_use]
    pub fn new(token_id: impl Into<String>, token_secret: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Creates a credential pair from validated values.
    #[must_use]
    pub fn from_parts(token_id: &AccessTokenId, token_secret: &AccessTokenSecret) -> Self {
        Self::new(token_id.as_ref(), token_secret.as_ref())
    }

    /// Returns the access token id.
    #[must_use]
    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    /// Returns the access token secret.
    #[must_use]
    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    /// Returns the first blank half of the pair, if any.
    ///
    /// Each half is checked on its own: a valid id with an empty secret is
    /// still incomplete.
    #[must_use]
    pub fn missing_field(&self) -> Option<CredentialField> {
        if self.token_id.trim().is_empty() {
            Some(CredentialField::TokenId)
        } else if self.token_secret.trim().is_empty() {
            Some(CredentialField::TokenSecret)
        } else {
            None
        }
    }

    /// Returns the authentication headers as `(name, value)` pairs.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            (TOKEN_ID_HEADER, self.token_id.as_str()),
            (TOKEN_SECRET_HEADER, self.token_secret.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token_id", &self.token_id)
            .field("token_secret", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_credentials_have_no_missing_field() {
        let credentials = Credentials::new("id", "secret");
        assert_eq!(credentials.missing_field(), None);
    }

    #[test]
    fn test_both_empty_reports_token_id_first() {
        let credentials = Credentials::new("", "");
        assert_eq!(credentials.missing_field(), Some(CredentialField::TokenId));
    }

    #[test]
    fn test_empty_secret_alone_is_rejected() {
        let credentials = Credentials::new("id", "");
        assert_eq!(
            credentials.missing_field(),
            Some(CredentialField::TokenSecret)
        );
    }

    #[test]
    fn test_empty_id_alone_is_rejected() {
        let credentials = Credentials::new("  ", "secret");
        assert_eq!(credentials.missing_field(), Some(CredentialField::TokenId));
    }

    #[test]
    fn test_from_parts_copies_values() {
        let credentials = Credentials::from_parts(
            &AccessTokenId::new("id").unwrap(),
            &AccessTokenSecret::new("secret").unwrap(),
        );
        assert_eq!(credentials.token_id(), "id");
        assert_eq!(credentials.token_secret(), "secret");
    }

    #[test]
    fn test_debug_masks_secret() {
        let credentials = Credentials::new("visible-id", "hidden-secret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("visible-id"));
        assert!(debug.contains("*****"));
        assert!(!debug.contains("hidden-secret"));
    }
}
