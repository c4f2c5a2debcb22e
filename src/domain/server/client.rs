//! Servers sub-client: CRUD, publishing and platform deployment.

use crate::domain::asset::segment;
use crate::domain::element::RelationshipProperties;
use crate::domain::manager::ElementManager;
use crate::domain::server::{ServerKind, SoftwareServer, SoftwareServerProperties};
use crate::error::SdkError;
use crate::shared::{Guid, InfrastructureManager};

/// Sub-client for software server operations.
pub type Servers<'a> = ElementManager<'a, ServerKind>;

impl<'a> ElementManager<'a, ServerKind> {
    /// Record that a server runs on a platform.
    pub async fn setup_deployed_on_platform(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        manager_is_home: bool,
        server_guid: &Guid,
        platform_guid: &Guid,
        properties: Option<&RelationshipProperties>,
    ) -> Result<(), SdkError> {
        self.setup_related_asset(
            user_id,
            manager,
            manager_is_home,
            [(server_guid, "serverGUID"), (platform_guid, "platformGUID")],
            deployment_path(server_guid, platform_guid),
            properties,
        )
        .await
    }

    pub async fn clear_deployed_on_platform(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        server_guid: &Guid,
        platform_guid: &Guid,
    ) -> Result<(), SdkError> {
        self.clear_related_asset(
            user_id,
            manager,
            [(server_guid, "serverGUID"), (platform_guid, "platformGUID")],
            deployment_path(server_guid, platform_guid),
        )
        .await
    }

    /// Page through the servers running on a platform.
    pub async fn deployed_on_platform(
        &self,
        user_id: &str,
        platform_guid: &Guid,
        start_from: u32,
        page_size: u32,
    ) -> Result<Vec<SoftwareServer>, SdkError> {
        self.related_elements::<SoftwareServerProperties>(
            user_id,
            (platform_guid, "platformGUID"),
            format!(
                "software-server-platforms/{}/software-servers",
                segment(platform_guid)
            ),
            start_from,
            page_size,
        )
        .await
    }
}

fn deployment_path(server_guid: &Guid, platform_guid: &Guid) -> String {
    format!(
        "software-servers/{}/software-server-platforms/{}",
        segment(server_guid),
        segment(platform_guid)
    )
}
