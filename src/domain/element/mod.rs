//! Element domain: the header, classification and property shapes shared by
//! every entity kind the service manages.

mod convert;
pub mod wire;

use crate::shared::serde_util::{null_as_default, option_timestamp_ms};
use crate::shared::Guid;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ─── Properties ──────────────────────────────────────────────────────────────

/// Implemented by every entity properties type.
pub trait ElementProperties:
    Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync
{
    fn qualified_name(&self) -> Option<&str>;
}

/// Properties used when cloning an element from a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProperties {
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_address: Option<String>,
}

impl TemplateProperties {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }
}

/// Effectivity window for a relationship between two elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipProperties {
    #[serde(
        default,
        with = "option_timestamp_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "option_timestamp_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_to: Option<DateTime<Utc>>,
}

// ─── Header ──────────────────────────────────────────────────────────────────

/// Where an element came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_metadata_collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_metadata_collection_name: Option<String>,
}

/// Audit stamps maintained by the repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementVersions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(
        default,
        with = "option_timestamp_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "option_timestamp_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: i64,
}

/// A classification attached to an element, e.g. `ReferenceData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementClassification {
    pub classification_name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub classification_properties: HashMap<String, serde_json::Value>,
}

/// Validated element header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementHeader {
    pub guid: Guid,
    pub type_name: Option<String>,
    pub origin: Option<ElementOrigin>,
    pub versions: Option<ElementVersions>,
    pub classifications: Vec<ElementClassification>,
}

// ─── Element ─────────────────────────────────────────────────────────────────

/// A metadata element returned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element<P> {
    pub header: ElementHeader,
    pub properties: P,
}

impl<P> Element<P> {
    pub fn guid(&self) -> &Guid {
        &self.header.guid
    }

    pub fn classification(&self, name: &str) -> Option<&ElementClassification> {
        self.header
            .classifications
            .iter()
            .find(|c| c.classification_name == name)
    }

    pub fn is_classified(&self, name: &str) -> bool {
        self.classification(name).is_some()
    }
}

impl<P: ElementProperties> Element<P> {
    /// Always present on a converted element.
    pub fn qualified_name(&self) -> &str {
        self.properties.qualified_name().unwrap_or_default()
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ElementValidationError {
    Multiple(String, Vec<ElementValidationError>),
    MissingHeader,
    MissingGuid,
    MissingProperties,
    MissingQualifiedName,
}

impl fmt::Display for ElementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementValidationError::Multiple(guid, errors) => {
                writeln!(f, "Element validation errors ({guid}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ElementValidationError::MissingHeader => write!(f, "Missing element header"),
            ElementValidationError::MissingGuid => write!(f, "Missing guid"),
            ElementValidationError::MissingProperties => write!(f, "Missing properties"),
            ElementValidationError::MissingQualifiedName => write!(f, "Missing qualified name"),
        }
    }
}

impl std::error::Error for ElementValidationError {}

/// An element the repository returned but that cannot be used is a
/// property-server failure.
impl From<ElementValidationError> for crate::error::SdkError {
    fn from(err: ElementValidationError) -> Self {
        crate::error::SdkError::PropertyServer(crate::error::HttpError::Decode(err.to_string()))
    }
}
