//! Records returned by tenant queries.

use serde::{Deserialize, Serialize};

/// A language a tenant has content in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language code, e.g. `en`.
    pub code: String,
    /// Display name, e.g. `English`.
    pub name: String,
}

/// A tenant as returned by the identifier lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Internal tenant id.
    pub id: String,
    /// Human-readable identifier.
    pub identifier: String,
    /// Languages configured for the tenant.
    #[serde(default)]
    pub available_languages: Vec<Language>,
}

/// A typed component of a shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeComponent {
    /// Component id within the shape.
    pub id: String,
    /// Component type, e.g. `richText`.
    #[serde(rename = "type")]
    pub component_type: String,
}

/// A content-type schema owned by a tenant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape id.
    pub id: String,
    /// Shape type, e.g. `product`, `document` or `folder`.
    #[serde(rename = "type")]
    pub shape_type: String,
    /// Display name.
    pub name: String,
    /// Components in declaration order.
    #[serde(default)]
    pub components: Vec<ShapeComponent>,
}

/// A tax rate definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VatType {
    /// VAT type id.
    pub id: String,
    /// Rate in percent.
    pub percent: f64,
    /// Display name.
    pub name: String,
}

/// Tenant metadata needed to pick a shape.
///
/// A fresh snapshot per [`fetch_tenant_info`](crate::tenant::fetch_tenant_info)
/// call; nothing is cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    /// Human-readable identifier.
    pub identifier: String,
    /// Id of the root folder of the catalogue tree.
    pub root_item_id: String,
    /// Shapes in the order the API returns them.
    #[serde(default)]
    pub shapes: Vec<Shape>,
    /// VAT types in the order the API returns them.
    #[serde(default)]
    pub vat_types: Vec<VatType>,
}
