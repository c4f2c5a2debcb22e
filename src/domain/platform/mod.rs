//! Software server platform domain: runtimes that host software servers.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::element::{Element, ElementProperties};
use crate::domain::kind::{AssetKind, ElementKind};
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties of a software server platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareServerPlatformProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_implementation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
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

impl ElementProperties for SoftwareServerPlatformProperties {
    fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }
}

pub type SoftwareServerPlatform = Element<SoftwareServerPlatformProperties>;

#[derive(Debug, Clone, Copy)]
pub struct PlatformKind;

impl ElementKind for PlatformKind {
    const COLLECTION: &'static str = "software-server-platforms";
    const GUID_PARAMETER: &'static str = "platformGUID";
    type Properties = SoftwareServerPlatformProperties;
}

impl AssetKind for PlatformKind {}
