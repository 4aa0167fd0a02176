//! Tenant resolution and tenant metadata.
//!
//! # Overview
//!
//! - [`resolve_tenant`]: Turns configuration and prompts into a [`TenantContext`]
//! - [`find_tenant`]: Exact-identifier tenant lookup
//! - [`fetch_tenant_info`]: Shapes, root item and VAT types of a tenant
//! - [`TenantError`]: Error type for tenant resolution
//!
//! # Example
//!
//! ```rust,ignore
//! use crystallize_onboard::prompt::TerminalPrompter;
//! use crystallize_onboard::tenant::{resolve_tenant, ResolveOptions};
//! use crystallize_onboard::OnboardConfig;
//!
//! let config = OnboardConfig::from_env()?;
//! let context = resolve_tenant(&config, &TerminalPrompter::new(), ResolveOptions::default()).await?;
//! println!("{} / {:?}", context.tenant_id(), context.language());
//! ```

mod context;
mod errors;
mod info;
mod resolver;
mod types;

pub use context::{ResolvedTenant, TenantContext};
pub use errors::TenantError;
pub use info::{fetch_tenant_info, GET_TENANT_INFO_QUERY};
pub use resolver::{find_tenant, resolve_tenant, ResolveOptions, GET_TENANTS_QUERY};
pub use types::{Language, Shape, ShapeComponent, Tenant, TenantInfo, VatType};
