//! Error types for the onboarding helpers.
//!
//! This module contains the configuration error type and [`OnboardError`],
//! the umbrella error the binary entry point reports before exiting.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Lower layers have their own error enums
//! ([`HttpError`](crate::clients::HttpError),
//! [`GraphqlError`](crate::clients::GraphqlError),
//! [`TenantError`](crate::tenant::TenantError),
//! [`ShapeError`](crate::shape::ShapeError)), all of which convert into
//! [`OnboardError`].
//!
//! # Example
//!
//! ```rust
//! use crystallize_onboard::{AccessTokenId, ConfigError};
//!
//! let result = AccessTokenId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessTokenId)));
//! ```

use thiserror::Error;

use crate::clients::GraphqlError;
use crate::prompt::PromptError;
use crate::shape::ShapeError;
use crate::tenant::TenantError;

/// Errors that can occur while building configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Tenant identifier cannot be empty.
    #[error("Tenant identifier cannot be empty. Please provide the identifier of your Crystallize tenant.")]
    EmptyTenantIdentifier,

    /// Access token id cannot be empty.
    #[error("Access token id cannot be empty. Please provide a valid Crystallize access token id.")]
    EmptyAccessTokenId,

    /// Access token secret cannot be empty.
    #[error("Access token secret cannot be empty. Please provide a valid Crystallize access token secret.")]
    EmptyAccessTokenSecret,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a URL with scheme (e.g., 'https://pim.crystallize.com/graphql').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Any failure surfaced by the onboarding flow.
///
/// The library never terminates the process; the binary matches on this
/// type, logs it and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A GraphQL request failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// An interactive prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Tenant resolution failed.
    #[error(transparent)]
    Tenant(#[from] TenantError),

    /// Shape selection failed.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Writing the resolved context failed.
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}
