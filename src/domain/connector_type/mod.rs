//! Connector type domain: descriptions of the connectors that can reach a
//! piece of technology.

use crate::domain::element::{Element, ElementProperties};
use crate::domain::kind::ElementKind;
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties of a connector type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorTypeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_asset_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_data_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_provider_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_framework_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_interface_language: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub connector_interfaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_technology_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_technology_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub target_technology_interfaces: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub target_technology_versions: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub recognized_additional_properties: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub recognized_configuration_properties: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub recognized_secured_properties: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub additional_properties: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub extended_properties: HashMap<String, serde_json::Value>,
}

impl ElementProperties for ConnectorTypeProperties {
    fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }
}

/// A connector type as stored in the repository.
pub type ConnectorType = Element<ConnectorTypeProperties>;

/// Kind descriptor for connector types. Not an asset: no publish/withdraw.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorTypeKind;

impl ElementKind for ConnectorTypeKind {
    const COLLECTION: &'static str = "connector-types";
    const GUID_PARAMETER: &'static str = "connectorTypeGUID";
    type Properties = ConnectorTypeProperties;
}

/// Sub-client for connector type operations.
#[cfg(feature = "http")]
pub type ConnectorTypes<'a> = crate::domain::manager::ElementManager<'a, ConnectorTypeKind>;
