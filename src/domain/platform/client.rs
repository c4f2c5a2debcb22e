//! Platforms sub-client: CRUD, publishing and host deployment.

use crate::domain::asset::segment;
use crate::domain::element::RelationshipProperties;
use crate::domain::manager::ElementManager;
use crate::domain::platform::{PlatformKind, SoftwareServerPlatform, SoftwareServerPlatformProperties};
use crate::error::SdkError;
use crate::shared::{Guid, InfrastructureManager};

/// Sub-client for software server platform operations.
pub type Platforms<'a> = ElementManager<'a, PlatformKind>;

impl<'a> ElementManager<'a, PlatformKind> {
    /// Record that a platform is deployed on a host.
    pub async fn setup_deployed_on_host(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        manager_is_home: bool,
        platform_guid: &Guid,
        host_guid: &Guid,
        properties: Option<&RelationshipProperties>,
    ) -> Result<(), SdkError> {
        self.setup_related_asset(
            user_id,
            manager,
            manager_is_home,
            [(platform_guid, "platformGUID"), (host_guid, "hostGUID")],
            deployment_path(platform_guid, host_guid),
            properties,
        )
        .await
    }

    /// Remove the deployment link between a platform and a host.
    pub async fn clear_deployed_on_host(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        platform_guid: &Guid,
        host_guid: &Guid,
    ) -> Result<(), SdkError> {
        self.clear_related_asset(
            user_id,
            manager,
            [(platform_guid, "platformGUID"), (host_guid, "hostGUID")],
            deployment_path(platform_guid, host_guid),
        )
        .await
    }

    /// Page through the platforms deployed on a host.
    pub async fn deployed_on_host(
        &self,
        user_id: &str,
        host_guid: &Guid,
        start_from: u32,
        page_size: u32,
    ) -> Result<Vec<SoftwareServerPlatform>, SdkError> {
        self.related_elements::<SoftwareServerPlatformProperties>(
            user_id,
            (host_guid, "hostGUID"),
            format!("hosts/{}/software-server-platforms", segment(host_guid)),
            start_from,
            page_size,
        )
        .await
    }
}

fn deployment_path(platform_guid: &Guid, host_guid: &Guid) -> String {
    format!(
        "software-server-platforms/{}/hosts/{}",
        segment(platform_guid),
        segment(host_guid)
    )
}
