//! Fetching tenant metadata.

use serde_json::json;

use crate::clients::{GraphqlClient, GraphqlError};
use crate::tenant::TenantInfo;

/// Fetches identifier, root item, shapes and VAT types of a tenant.
pub const GET_TENANT_INFO_QUERY: &str = r"query GetTenantInfo($id: ID!) {
  tenant {
    get(id: $id) {
      identifier
      rootItemId
      shapes {
        id
        type
        name
        components {
          id
          type
        }
      }
      vatTypes {
        id
        percent
        name
      }
    }
  }
}";

/// Fetches [`TenantInfo`] for `tenant_id`. Every call goes to the API.
///
/// # Errors
///
/// Returns whatever the [`GraphqlClient`] returns, plus
/// [`GraphqlError::MissingData`] if the tenant comes back `null`.
pub async fn fetch_tenant_info(
    client: &GraphqlClient,
    tenant_id: &str,
) -> Result<TenantInfo, GraphqlError> {
    let mut data = client
        .query_raw(GET_TENANT_INFO_QUERY, json!({ "id": tenant_id }))
        .await?;

    let tenant = data
        .pointer_mut("/tenant/get")
        .map(serde_json::Value::take)
        .filter(|tenant| !tenant.is_null());

    match tenant {
        Some(tenant) => serde_json::from_value(tenant).map_err(GraphqlError::UnexpectedData),
        None => Err(GraphqlError::MissingData {
            payload: json!({ "data": data }),
        }),
    }
}
