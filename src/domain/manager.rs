//! Generic entity sub-client: the operations every entity kind shares.
//!
//! Each kind plugs in through [`ElementKind`](crate::domain::kind::ElementKind): its collection path segment,
//! the name of its GUID parameter, and its properties type. The per-kind
//! sub-clients (`Hosts`, `DataAssets`, ...) are aliases of
//! [`ElementManager`] with kind-specific extras added in their own modules.

use crate::client::InfrastructureClient;
use crate::domain::element::wire::{
    ElementListResponse, ElementRequestBody, GuidResponse, MetadataSourceRequestBody,
    NameRequestBody, SearchStringRequestBody, SingleElementResponse, TemplateRequestBody,
    VoidResponse,
};
use crate::domain::element::{Element, ElementProperties, TemplateProperties};
use crate::domain::kind::ElementKind;
use crate::error::{HttpError, SdkError};
use crate::shared::validation::{
    validate_guid, validate_manager, validate_name, validate_qualified_name,
    validate_search_string, validate_user_id,
};
use crate::shared::{Guid, InfrastructureManager, Paging};
use std::marker::PhantomData;

/// Sub-client for one entity kind.
pub struct ElementManager<'a, K: ElementKind> {
    pub(crate) client: &'a InfrastructureClient,
    pub(crate) kind: PhantomData<K>,
}

impl<'a, K: ElementKind> ElementManager<'a, K> {
    pub(crate) fn new(client: &'a InfrastructureClient) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    /// Create an element. Returns its GUID.
    ///
    /// `manager_is_home` gives the infrastructure manager exclusive update
    /// rights on the new element.
    pub async fn create(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        manager_is_home: bool,
        properties: &K::Properties,
    ) -> Result<Guid, SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        validate_qualified_name(properties.qualified_name())?;

        let url = format!(
            "{}?infrastructureManagerIsHome={}",
            self.collection_url(user_id),
            manager_is_home
        );
        tracing::debug!(kind = K::COLLECTION, user_id, "create");
        let resp: GuidResponse = self
            .client
            .http
            .post(&url, &ElementRequestBody::new(manager, properties))
            .await?;
        expect_guid(resp)
    }

    /// Create an element by copying a template element.
    pub async fn create_from_template(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        manager_is_home: bool,
        template_guid: &Guid,
        template: &TemplateProperties,
    ) -> Result<Guid, SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        validate_guid(template_guid, "templateGUID")?;
        validate_name(&template.qualified_name, "qualifiedName")?;

        let url = format!(
            "{}/from-template/{}?infrastructureManagerIsHome={}",
            self.collection_url(user_id),
            urlencoding::encode(template_guid.as_str()),
            manager_is_home
        );
        tracing::debug!(kind = K::COLLECTION, user_id, template_guid = %template_guid, "create from template");
        let resp: GuidResponse = self
            .client
            .http
            .post(&url, &TemplateRequestBody::new(manager, template))
            .await?;
        expect_guid(resp)
    }

    /// Update an element's properties.
    ///
    /// With `is_merge_update` the supplied properties overlay the stored ones;
    /// otherwise they replace them and `qualifiedName` is required.
    pub async fn update(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        guid: &Guid,
        is_merge_update: bool,
        properties: &K::Properties,
    ) -> Result<(), SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        validate_guid(guid, K::GUID_PARAMETER)?;
        if !is_merge_update {
            validate_qualified_name(properties.qualified_name())?;
        }

        let url = format!(
            "{}?isMergeUpdate={}",
            self.element_url(user_id, guid),
            is_merge_update
        );
        tracing::debug!(kind = K::COLLECTION, user_id, guid = %guid, is_merge_update, "update");
        let _: VoidResponse = self
            .client
            .http
            .post(&url, &ElementRequestBody::new(manager, properties))
            .await?;
        Ok(())
    }

    /// Remove an element.
    pub async fn remove(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        guid: &Guid,
    ) -> Result<(), SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        validate_guid(guid, K::GUID_PARAMETER)?;

        let url = format!("{}/delete", self.element_url(user_id, guid));
        tracing::debug!(kind = K::COLLECTION, user_id, guid = %guid, "remove");
        let _: VoidResponse = self
            .client
            .http
            .post(&url, &MetadataSourceRequestBody::new(manager))
            .await?;
        Ok(())
    }

    /// Find elements whose properties match a search string.
    ///
    /// The search string is interpreted by the server as a regular expression.
    pub async fn find(
        &self,
        user_id: &str,
        search_string: &str,
        start_from: u32,
        page_size: u32,
    ) -> Result<Vec<Element<K::Properties>>, SdkError> {
        validate_user_id(user_id)?;
        validate_search_string(search_string)?;

        let paging = self.paging(start_from, page_size);
        let url = format!(
            "{}/by-search-string?{}",
            self.collection_url(user_id),
            paging.to_query()
        );
        tracing::debug!(kind = K::COLLECTION, user_id, search_string, "find");
        let resp: ElementListResponse<K::Properties> = self
            .client
            .http
            .post(&url, &SearchStringRequestBody::new(search_string))
            .await?;
        convert_list(resp)
    }

    /// Retrieve elements with an exactly matching name.
    pub async fn get_by_name(
        &self,
        user_id: &str,
        name: &str,
        start_from: u32,
        page_size: u32,
    ) -> Result<Vec<Element<K::Properties>>, SdkError> {
        validate_user_id(user_id)?;
        validate_name(name, "name")?;

        let paging = self.paging(start_from, page_size);
        let url = format!(
            "{}/by-name?{}",
            self.collection_url(user_id),
            paging.to_query()
        );
        tracing::debug!(kind = K::COLLECTION, user_id, lookup_name = name, "get by name");
        let resp: ElementListResponse<K::Properties> = self
            .client
            .http
            .post(&url, &NameRequestBody::new(name))
            .await?;
        convert_list(resp)
    }

    /// List the elements owned by an infrastructure manager.
    pub async fn list_for_manager(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        start_from: u32,
        page_size: u32,
    ) -> Result<Vec<Element<K::Properties>>, SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;

        let paging = self.paging(start_from, page_size);
        let url = format!(
            "{}/infrastructure-managers/{}/{}/{}?{}",
            self.client.http.user_url(user_id),
            urlencoding::encode(manager.guid.as_str()),
            urlencoding::encode(&manager.name),
            K::COLLECTION,
            paging.to_query()
        );
        tracing::debug!(kind = K::COLLECTION, user_id, manager = %manager.name, "list for manager");
        let resp: ElementListResponse<K::Properties> = self.client.http.get(&url).await?;
        convert_list(resp)
    }

    /// Retrieve one element by GUID.
    pub async fn get(
        &self,
        user_id: &str,
        guid: &Guid,
    ) -> Result<Element<K::Properties>, SdkError> {
        validate_user_id(user_id)?;
        validate_guid(guid, K::GUID_PARAMETER)?;

        let url = self.element_url(user_id, guid);
        tracing::debug!(kind = K::COLLECTION, user_id, guid = %guid, "get");
        let resp: SingleElementResponse<K::Properties> = self.client.http.get(&url).await?;
        match resp.element {
            Some(element) => Ok(Element::<K::Properties>::try_from(element)?),
            None => Err(SdkError::PropertyServer(HttpError::Decode(format!(
                "no element returned for {} {}",
                K::GUID_PARAMETER,
                guid
            )))),
        }
    }

    // ── Helpers shared with the per-kind extensions ──────────────────────

    pub(crate) fn collection_url(&self, user_id: &str) -> String {
        format!("{}/{}", self.client.http.user_url(user_id), K::COLLECTION)
    }

    pub(crate) fn element_url(&self, user_id: &str, guid: &Guid) -> String {
        format!(
            "{}/{}",
            self.collection_url(user_id),
            urlencoding::encode(guid.as_str())
        )
    }

    pub(crate) fn paging(&self, start_from: u32, page_size: u32) -> Paging {
        Paging::clamp(start_from, page_size, self.client.max_page_size)
    }
}

fn expect_guid(resp: GuidResponse) -> Result<Guid, SdkError> {
    match resp.guid {
        Some(guid) if !guid.is_empty() => Ok(guid),
        _ => Err(SdkError::PropertyServer(HttpError::Decode(
            "no guid returned".to_string(),
        ))),
    }
}

/// Convert a paged list payload. A `null` list is an empty page.
pub(crate) fn convert_list<P: ElementProperties>(
    resp: ElementListResponse<P>,
) -> Result<Vec<Element<P>>, SdkError> {
    resp.elements
        .unwrap_or_default()
        .into_iter()
        .map(|e| Element::<P>::try_from(e).map_err(SdkError::from))
        .collect()
}
