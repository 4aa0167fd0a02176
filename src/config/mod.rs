//! Configuration types for the onboarding helpers.
//!
//! This module provides the configuration the onboarding flow starts from:
//! whatever the environment (or an existing env file) already knows about the
//! tenant and its access token, plus the endpoint and output locations.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`OnboardConfig`]: The configuration struct holding all settings
//! - [`OnboardConfigBuilder`]: A builder for constructing [`OnboardConfig`] instances
//! - [`TenantIdentifier`]: A validated tenant slug
//! - [`AccessTokenId`] / [`AccessTokenSecret`]: The validated credential pair
//! - [`ApiUrl`]: A validated GraphQL endpoint URL
//! - [`EnvFile`]: Reading and overwriting the flat `KEY=value` env file
//!
//! # Example
//!
//! ```rust
//! use crystallize_onboard::{OnboardConfig, TenantIdentifier};
//!
//! let config = OnboardConfig::builder()
//!     .tenant_identifier(TenantIdentifier::new("demo").unwrap())
//!     .env_file(".env.local")
//!     .build();
//!
//! assert_eq!(config.tenant_identifier().unwrap().as_ref(), "demo");
//! assert_eq!(config.api_url().as_ref(), "https://pim.crystallize.com/graphql");
//! ```

mod env_file;
mod newtypes;

pub use env_file::{
    EnvFile, ACCESS_TOKEN_ID_VAR, ACCESS_TOKEN_SECRET_VAR, API_URL_VAR, DEFAULT_ENV_FILE,
    TENANT_IDENTIFIER_VAR,
};
pub use newtypes::{AccessTokenId, AccessTokenSecret, ApiUrl, TenantIdentifier};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// The Crystallize PIM GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://pim.crystallize.com/graphql";

/// Configuration for the onboarding flow.
///
/// Every credential field is optional: anything missing is prompted for by
/// [`resolve_tenant`](crate::tenant::resolve_tenant).
///
/// # Thread Safety
///
/// `OnboardConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OnboardConfig {
    tenant_identifier: Option<TenantIdentifier>,
    access_token_id: Option<AccessTokenId>,
    access_token_secret: Option<AccessTokenSecret>,
    api_url: ApiUrl,
    env_file: PathBuf,
    user_agent_prefix: Option<String>,
}

impl OnboardConfig {
    /// Creates a new builder for constructing an `OnboardConfig`.
    #[must_use]
    pub fn builder() -> OnboardConfigBuilder {
        OnboardConfigBuilder::new()
    }

    /// Reads configuration from the process environment.
    ///
    /// Empty variables are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if `CRYSTALLIZE_API_URL` is set
    /// to something that is not a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), DEFAULT_ENV_FILE)
    }

    /// Reads configuration from the process environment, falling back to the
    /// values stored in the env file at `path` for anything unset.
    ///
    /// The resulting configuration also writes back to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the endpoint override is not
    /// a URL. An unreadable env file is logged and ignored.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = EnvFile::read(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable env file {}: {}", path.display(), e);
            EnvFile::default()
        });
        Self::from_lookup(
            |key| {
                std::env::var(key)
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .or_else(|| file.get(key).map(str::to_string))
            },
            path,
        )
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the endpoint override is not
    /// a URL.
    pub fn from_lookup<F>(lookup: F, env_file: impl Into<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder().env_file(env_file);

        if let Some(identifier) =
            lookup(TENANT_IDENTIFIER_VAR).and_then(|v| TenantIdentifier::new(v).ok())
        {
            builder = builder.tenant_identifier(identifier);
        }
        if let Some(id) = lookup(ACCESS_TOKEN_ID_VAR).and_then(|v| AccessTokenId::new(v).ok()) {
            builder = builder.access_token_id(id);
        }
        if let Some(secret) =
            lookup(ACCESS_TOKEN_SECRET_VAR).and_then(|v| AccessTokenSecret::new(v).ok())
        {
            builder = builder.access_token_secret(secret);
        }
        if let Some(url) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            builder = builder.api_url(ApiUrl::new(url)?);
        }

        Ok(builder.build())
    }

    /// Returns the tenant identifier, if known.
    #[must_use]
    pub const fn tenant_identifier(&self) -> Option<&TenantIdentifier> {
        self.tenant_identifier.as_ref()
    }

    /// Returns the access token id, if known.
    #[must_use]
    pub const fn access_token_id(&self) -> Option<&AccessTokenId> {
        self.access_token_id.as_ref()
    }

    /// Returns the access token secret, if known.
    #[must_use]
    pub const fn access_token_secret(&self) -> Option<&AccessTokenSecret> {
        self.access_token_secret.as_ref()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the path the resolved credentials are written to.
    #[must_use]
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for OnboardConfig {
    fn default() -> Self {
        OnboardConfigBuilder::new().build()
    }
}

// Verify OnboardConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OnboardConfig>();
};

/// Builder for constructing [`OnboardConfig`] instances.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `env_file`: `.env`
/// - credentials and tenant identifier: unset
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct OnboardConfigBuilder {
    tenant_identifier: Option<TenantIdentifier>,
    access_token_id: Option<AccessTokenId>,
    access_token_secret: Option<AccessTokenSecret>,
    api_url: Option<ApiUrl>,
    env_file: Option<PathBuf>,
    user_agent_prefix: Option<String>,
}

impl OnboardConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tenant identifier.
    #[must_use]
    pub fn tenant_identifier(mut self, identifier: TenantIdentifier) -> Self {
        self.tenant_identifier = Some(identifier);
        self
    }

    /// Sets the access token id.
    #[must_use]
    pub fn access_token_id(mut self, id: AccessTokenId) -> Self {
        self.access_token_id = Some(id);
        self
    }

    /// Sets the access token secret.
    #[must_use]
    pub fn access_token_secret(mut self, secret: AccessTokenSecret) -> Self {
        self.access_token_secret = Some(secret);
        self
    }

    /// Overrides the GraphQL endpoint.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the env file location.
    #[must_use]
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`OnboardConfig`]. All fields have defaults, so this cannot fail.
    #[must_use]
    pub fn build(self) -> OnboardConfig {
        OnboardConfig {
            tenant_identifier: self.tenant_identifier,
            access_token_id: self.access_token_id,
            access_token_secret: self.access_token_secret,
            api_url: self.api_url.unwrap_or_default(),
            env_file: self
                .env_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE)),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
