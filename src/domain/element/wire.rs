//! Wire types shared by every entity kind: request bodies and response payloads.

use super::{
    ElementClassification, ElementOrigin, ElementVersions, RelationshipProperties,
    TemplateProperties,
};
use crate::shared::{Guid, InfrastructureManager};
use serde::{Deserialize, Serialize};

// ─── Elements ────────────────────────────────────────────────────────────────

/// Type information carried in a raw header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementTypeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

/// Raw element header from the REST API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementHeaderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<Guid>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementTypeResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<ElementOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<ElementVersions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<ElementClassification>>,
}

/// Raw element: header plus kind-specific properties, both nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementResponse<P> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_header: Option<ElementHeaderResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<P>,
}

// ─── Response payloads ───────────────────────────────────────────────────────

/// Payload of a call that creates an element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GuidResponse {
    #[serde(default)]
    pub guid: Option<Guid>,
}

/// Payload of a call that returns one element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SingleElementResponse<P> {
    #[serde(default = "Option::default")]
    pub element: Option<ElementResponse<P>>,
}

/// Payload of a paged query. A `null` list means no matches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementListResponse<P> {
    #[serde(default = "Option::default")]
    pub elements: Option<Vec<ElementResponse<P>>>,
}

/// Payload of a call with no result beyond success.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VoidResponse {}

// ─── Request bodies ──────────────────────────────────────────────────────────

/// Body for create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct ElementRequestBody<'a, P> {
    #[serde(rename = "infrastructureManagerGUID")]
    pub infrastructure_manager_guid: &'a Guid,
    #[serde(rename = "infrastructureManagerName")]
    pub infrastructure_manager_name: &'a str,
    pub properties: &'a P,
}

impl<'a, P> ElementRequestBody<'a, P> {
    pub fn new(manager: &'a InfrastructureManager, properties: &'a P) -> Self {
        Self {
            infrastructure_manager_guid: &manager.guid,
            infrastructure_manager_name: &manager.name,
            properties,
        }
    }
}

/// Body for create-from-template calls.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateRequestBody<'a> {
    #[serde(rename = "infrastructureManagerGUID")]
    pub infrastructure_manager_guid: &'a Guid,
    #[serde(rename = "infrastructureManagerName")]
    pub infrastructure_manager_name: &'a str,
    #[serde(rename = "templateProperties")]
    pub template_properties: &'a TemplateProperties,
}

impl<'a> TemplateRequestBody<'a> {
    pub fn new(manager: &'a InfrastructureManager, template: &'a TemplateProperties) -> Self {
        Self {
            infrastructure_manager_guid: &manager.guid,
            infrastructure_manager_name: &manager.name,
            template_properties: template,
        }
    }
}

/// Body for calls that only need provenance (deletes, classification changes).
#[derive(Debug, Clone, Serialize)]
pub struct MetadataSourceRequestBody<'a> {
    #[serde(rename = "infrastructureManagerGUID")]
    pub infrastructure_manager_guid: &'a Guid,
    #[serde(rename = "infrastructureManagerName")]
    pub infrastructure_manager_name: &'a str,
}

impl<'a> MetadataSourceRequestBody<'a> {
    pub fn new(manager: &'a InfrastructureManager) -> Self {
        Self {
            infrastructure_manager_guid: &manager.guid,
            infrastructure_manager_name: &manager.name,
        }
    }
}

/// Body for relationship setup calls.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipRequestBody<'a> {
    #[serde(rename = "infrastructureManagerGUID")]
    pub infrastructure_manager_guid: &'a Guid,
    #[serde(rename = "infrastructureManagerName")]
    pub infrastructure_manager_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<&'a RelationshipProperties>,
}

impl<'a> RelationshipRequestBody<'a> {
    pub fn new(
        manager: &'a InfrastructureManager,
        properties: Option<&'a RelationshipProperties>,
    ) -> Self {
        Self {
            infrastructure_manager_guid: &manager.guid,
            infrastructure_manager_name: &manager.name,
            properties,
        }
    }
}

/// Body for `by-search-string` queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStringRequestBody<'a> {
    pub search_string: &'a str,
    pub search_string_parameter_name: &'static str,
}

impl<'a> SearchStringRequestBody<'a> {
    pub fn new(search_string: &'a str) -> Self {
        Self {
            search_string,
            search_string_parameter_name: "searchString",
        }
    }
}

/// Body for `by-name` queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequestBody<'a> {
    pub name: &'a str,
    pub name_parameter_name: &'static str,
}

impl<'a> NameRequestBody<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            name_parameter_name: "name",
        }
    }
}

/// Empty body for publish/withdraw.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyRequestBody {}
