//! Asset extension: operations available only on asset-backed kinds.
//!
//! Publishing moves an asset into the published zones so it becomes
//! discoverable; withdrawing returns it to the default zones. Relationship
//! helpers here back the per-kind link operations (cluster membership,
//! deployment).

use crate::domain::element::wire::{
    ElementListResponse, EmptyRequestBody, MetadataSourceRequestBody, RelationshipRequestBody,
    VoidResponse,
};
use crate::domain::element::{Element, ElementProperties, RelationshipProperties};
use crate::domain::kind::AssetKind;
use crate::domain::manager::{convert_list, ElementManager};
use crate::error::SdkError;
use crate::shared::validation::{validate_guid, validate_manager, validate_user_id};
use crate::shared::{Guid, InfrastructureManager};

impl<'a, K: AssetKind> ElementManager<'a, K> {
    /// Make the asset visible in the published zones.
    pub async fn publish(&self, user_id: &str, guid: &Guid) -> Result<(), SdkError> {
        self.change_visibility(user_id, guid, "publish").await
    }

    /// Return the asset to the default zones.
    pub async fn withdraw(&self, user_id: &str, guid: &Guid) -> Result<(), SdkError> {
        self.change_visibility(user_id, guid, "withdraw").await
    }

    async fn change_visibility(
        &self,
        user_id: &str,
        guid: &Guid,
        action: &'static str,
    ) -> Result<(), SdkError> {
        validate_user_id(user_id)?;
        validate_guid(guid, K::GUID_PARAMETER)?;

        let url = format!("{}/{}", self.element_url(user_id, guid), action);
        tracing::debug!(kind = K::COLLECTION, user_id, guid = %guid, action);
        let _: VoidResponse = self.client.http.post(&url, &EmptyRequestBody {}).await?;
        Ok(())
    }

    // ── Relationship helpers ─────────────────────────────────────────────

    /// Link two elements. `path` is relative to the user URL.
    pub(crate) async fn setup_related_asset(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        manager_is_home: bool,
        ends: [(&Guid, &str); 2],
        path: String,
        properties: Option<&RelationshipProperties>,
    ) -> Result<(), SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        for (guid, parameter) in ends {
            validate_guid(guid, parameter)?;
        }

        let url = format!(
            "{}/{}?infrastructureManagerIsHome={}",
            self.client.http.user_url(user_id),
            path,
            manager_is_home
        );
        tracing::debug!(kind = K::COLLECTION, user_id, path = %path, "setup related asset");
        let _: VoidResponse = self
            .client
            .http
            .post(&url, &RelationshipRequestBody::new(manager, properties))
            .await?;
        Ok(())
    }

    /// Unlink two elements. `path` is relative to the user URL.
    pub(crate) async fn clear_related_asset(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        ends: [(&Guid, &str); 2],
        path: String,
    ) -> Result<(), SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        for (guid, parameter) in ends {
            validate_guid(guid, parameter)?;
        }

        let url = format!("{}/{}/delete", self.client.http.user_url(user_id), path);
        tracing::debug!(kind = K::COLLECTION, user_id, path = %path, "clear related asset");
        let _: VoidResponse = self
            .client
            .http
            .post(&url, &MetadataSourceRequestBody::new(manager))
            .await?;
        Ok(())
    }

    /// Page through the elements linked to `anchor`. `path` is relative to the user URL.
    pub(crate) async fn related_elements<P: ElementProperties>(
        &self,
        user_id: &str,
        anchor: (&Guid, &str),
        path: String,
        start_from: u32,
        page_size: u32,
    ) -> Result<Vec<Element<P>>, SdkError> {
        validate_user_id(user_id)?;
        validate_guid(anchor.0, anchor.1)?;

        let paging = self.paging(start_from, page_size);
        let url = format!(
            "{}/{}?{}",
            self.client.http.user_url(user_id),
            path,
            paging.to_query()
        );
        tracing::debug!(kind = K::COLLECTION, user_id, path = %path, "related elements");
        let resp: ElementListResponse<P> = self.client.http.get(&url).await?;
        convert_list(resp)
    }
}

/// Percent-encode a GUID for use as a path segment.
pub(crate) fn segment(guid: &Guid) -> String {
    urlencoding::encode(guid.as_str()).into_owned()
}
