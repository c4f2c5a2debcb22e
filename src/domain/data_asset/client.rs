//! Data assets sub-client: CRUD, publishing and reference-data classification.

use crate::domain::data_asset::DataAssetKind;
use crate::domain::element::wire::{MetadataSourceRequestBody, VoidResponse};
use crate::domain::manager::ElementManager;
use crate::error::SdkError;
use crate::shared::validation::{validate_guid, validate_manager, validate_user_id};
use crate::shared::{Guid, InfrastructureManager};

/// Sub-client for data asset operations.
pub type DataAssets<'a> = ElementManager<'a, DataAssetKind>;

impl<'a> ElementManager<'a, DataAssetKind> {
    /// Classify the asset as reference data.
    pub async fn set_as_reference_data(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        asset_guid: &Guid,
    ) -> Result<(), SdkError> {
        self.reference_data(user_id, manager, asset_guid, false).await
    }

    /// Remove the reference-data classification.
    pub async fn clear_as_reference_data(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        asset_guid: &Guid,
    ) -> Result<(), SdkError> {
        self.reference_data(user_id, manager, asset_guid, true).await
    }

    async fn reference_data(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        asset_guid: &Guid,
        clear: bool,
    ) -> Result<(), SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        validate_guid(asset_guid, "assetGUID")?;

        let mut url = format!("{}/is-reference-data", self.element_url(user_id, asset_guid));
        if clear {
            url.push_str("/delete");
        }
        tracing::debug!(user_id, asset_guid = %asset_guid, clear, "reference data classification");
        let _: VoidResponse = self
            .client
            .http
            .post(&url, &MetadataSourceRequestBody::new(manager))
            .await?;
        Ok(())
    }
}
