//! Authentication types for the Crystallize API.
//!
//! # Overview
//!
//! - [`Credentials`]: The access token id / secret pair sent with every request
//! - [`CredentialField`]: Names the half of the pair that is missing
//!
//! Credentials are created once by
//! [`resolve_tenant`](crate::tenant::resolve_tenant) and carried inside the
//! resulting [`TenantContext`](crate::tenant::TenantContext); nothing is
//! stored in process-wide state.

mod credentials;

pub use credentials::{CredentialField, Credentials, TOKEN_ID_HEADER, TOKEN_SECRET_HEADER};
