//! Host domain: physical or virtual machines and the clusters they form.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::element::{Element, ElementProperties};
use crate::domain::kind::{AssetKind, ElementKind};
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties of a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_implementation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system_patch_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_address: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub zone_membership: Vec<String>,
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

impl ElementProperties for HostProperties {
    fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }
}

/// A host as stored in the repository.
pub type Host = Element<HostProperties>;

/// Kind descriptor for hosts.
#[derive(Debug, Clone, Copy)]
pub struct HostKind;

impl ElementKind for HostKind {
    const COLLECTION: &'static str = "hosts";
    const GUID_PARAMETER: &'static str = "hostGUID";
    type Properties = HostProperties;
}

impl AssetKind for HostKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_properties_wire_names() {
        let props = HostProperties {
            qualified_name: Some("Host:srv01".to_string()),
            operating_system: Some("Linux".to_string()),
            zone_membership: vec!["infrastructure".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "qualifiedName": "Host:srv01",
                "operatingSystem": "Linux",
                "zoneMembership": ["infrastructure"]
            })
        );
    }

    #[test]
    fn test_host_properties_accept_null_collections() {
        let props: HostProperties = serde_json::from_value(serde_json::json!({
            "qualifiedName": "Host:srv01",
            "zoneMembership": null,
            "additionalProperties": null,
            "extendedProperties": null
        }))
        .unwrap();
        assert!(props.zone_membership.is_empty());
        assert!(props.additional_properties.is_empty());
        assert!(props.extended_properties.is_empty());
    }
}
