//! Data asset domain: data sets, files and stores catalogued as assets.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::element::{Element, ElementProperties};
use crate::domain::kind::{AssetKind, ElementKind};
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification marking an asset as reference data.
pub const REFERENCE_DATA_CLASSIFICATION: &str = "ReferenceData";

/// Properties of a data asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAssetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_identifier: Option<String>,
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

impl ElementProperties for DataAssetProperties {
    fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }
}

/// A data asset as stored in the repository.
pub type DataAsset = Element<DataAssetProperties>;

impl DataAsset {
    pub fn is_reference_data(&self) -> bool {
        self.is_classified(REFERENCE_DATA_CLASSIFICATION)
    }
}

/// Kind descriptor for data assets.
#[derive(Debug, Clone, Copy)]
pub struct DataAssetKind;

impl ElementKind for DataAssetKind {
    const COLLECTION: &'static str = "data-assets";
    const GUID_PARAMETER: &'static str = "assetGUID";
    type Properties = DataAssetProperties;
}

impl AssetKind for DataAssetKind {}
