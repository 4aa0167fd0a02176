//! The resolved tenant context.

use serde::Serialize;

use crate::clients::GraphqlClient;
use crate::config::TenantIdentifier;

/// Everything later steps need to talk to the resolved tenant.
///
/// Created by [`resolve_tenant`](crate::tenant::resolve_tenant) and passed
/// explicitly to [`select_shape`](crate::shape::select_shape) and friends.
/// Resolving again builds a new context; nothing is memoized.
#[derive(Debug)]
pub struct TenantContext {
    tenant_id: String,
    tenant_identifier: TenantIdentifier,
    language: Option<String>,
    client: GraphqlClient,
}

impl TenantContext {
    /// Assembles a context from already-resolved parts.
    #[must_use]
    pub const fn new(
        tenant_id: String,
        tenant_identifier: TenantIdentifier,
        language: Option<String>,
        client: GraphqlClient,
    ) -> Self {
        Self {
            tenant_id,
            tenant_identifier,
            language,
            client,
        }
    }

    /// Internal tenant id.
    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Human-readable tenant identifier.
    #[must_use]
    pub const fn tenant_identifier(&self) -> &TenantIdentifier {
        &self.tenant_identifier
    }

    /// Selected language code; `None` when language resolution was skipped.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// GraphQL client authenticated for this tenant.
    #[must_use]
    pub const fn client(&self) -> &GraphqlClient {
        &self.client
    }

    /// The `{tenantId, language}` pair handed to calling scripts.
    #[must_use]
    pub fn resolved(&self) -> ResolvedTenant {
        ResolvedTenant {
            tenant_id: self.tenant_id.clone(),
            tenant_identifier: self.tenant_identifier.to_string(),
            language: self.language.clone(),
        }
    }
}

/// Serializable summary of a [`TenantContext`], without credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTenant {
    /// Internal tenant id.
    pub tenant_id: String,
    /// Human-readable tenant identifier.
    pub tenant_identifier: String,
    /// Selected language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
