//! # Crystallize Onboard
//!
//! Helpers for scripts that import data into a Crystallize tenant: resolving
//! which tenant, credentials and language to work with, talking to the PIM
//! GraphQL API, choosing a shape and batching items.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`OnboardConfig`] and [`OnboardConfigBuilder`]
//! - Validated newtypes for the tenant identifier and access token pair
//! - A minimal authenticated GraphQL client ([`GraphqlClient`])
//! - Interactive tenant resolution that persists credentials to `.env`
//!   ([`resolve_tenant`])
//! - Tenant metadata lookup ([`fetch_tenant_info`])
//! - Shape selection with optional filtering ([`select_shape`])
//! - Fixed-size batching of item lists ([`batch::chunk`])
//!
//! ## Quick Start
//!
//! ```rust
//! use crystallize_onboard::{AccessTokenId, AccessTokenSecret, OnboardConfig, TenantIdentifier};
//!
//! let config = OnboardConfig::builder()
//!     .tenant_identifier(TenantIdentifier::new("furniture").unwrap())
//!     .access_token_id(AccessTokenId::new("token-id").unwrap())
//!     .access_token_secret(AccessTokenSecret::new("token-secret").unwrap())
//!     .build();
//!
//! assert_eq!(config.api_url().as_ref(), "https://pim.crystallize.com/graphql");
//! ```
//!
//! ## Resolving a Tenant
//!
//! ```rust,ignore
//! use crystallize_onboard::prompt::TerminalPrompter;
//! use crystallize_onboard::shape::ShapeQuery;
//! use crystallize_onboard::tenant::ResolveOptions;
//! use crystallize_onboard::{resolve_tenant, select_shape, OnboardConfig};
//!
//! let config = OnboardConfig::from_env_and_file(".env")?;
//! let prompter = TerminalPrompter::new();
//!
//! // Prompts for anything missing and rewrites .env
//! let context = resolve_tenant(&config, &prompter, ResolveOptions::default()).await?;
//!
//! let shape = select_shape(&context, &prompter, ShapeQuery::new().of_type("product")).await?;
//! println!("{} -> {}", shape.shape_id, shape.root_item_id);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: The resolved tenant is a value passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **No process exits**: Every failure is a typed error; only the binary exits
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod batch;
pub mod clients;
pub mod config;
pub mod error;
pub mod prompt;
pub mod shape;
pub mod tenant;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    AccessTokenId, AccessTokenSecret, ApiUrl, EnvFile, OnboardConfig, OnboardConfigBuilder,
    TenantIdentifier,
};
pub use error::{ConfigError, OnboardError};

// Re-export client types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlRequest, HttpClient, HttpError, HttpResponse,
    HttpResponseError,
};

// Re-export the onboarding operations
pub use batch::{chunk, chunk_owned};
pub use shape::{select_shape, SelectedShape, ShapeError, ShapeQuery};
pub use tenant::{
    fetch_tenant_info, resolve_tenant, ResolveOptions, TenantContext, TenantError, TenantInfo,
};
