//! Hosts sub-client: CRUD, publishing and cluster membership.

use crate::domain::asset::segment;
use crate::domain::element::RelationshipProperties;
use crate::domain::host::{Host, HostKind, HostProperties};
use crate::domain::manager::ElementManager;
use crate::error::SdkError;
use crate::shared::validation::{validate_guid, validate_manager, validate_user_id};
use crate::shared::{Guid, InfrastructureManager};

/// Sub-client for host operations.
pub type Hosts<'a> = ElementManager<'a, HostKind>;

impl<'a> ElementManager<'a, HostKind> {
    /// Record that `member_guid` is a member of the host cluster `cluster_guid`.
    pub async fn setup_cluster_member(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        manager_is_home: bool,
        cluster_guid: &Guid,
        member_guid: &Guid,
        properties: Option<&RelationshipProperties>,
    ) -> Result<(), SdkError> {
        validate_user_id(user_id)?;
        validate_manager(manager)?;
        validate_guid(cluster_guid, "clusterGUID")?;
        validate_guid(member_guid, "memberGUID")?;
        reject_self_membership(cluster_guid, member_guid)?;

        self.setup_related_asset(
            user_id,
            manager,
            manager_is_home,
            [(cluster_guid, "clusterGUID"), (member_guid, "memberGUID")],
            cluster_member_path(cluster_guid, member_guid),
            properties,
        )
        .await
    }

    /// Remove a host from a cluster.
    pub async fn clear_cluster_member(
        &self,
        user_id: &str,
        manager: &InfrastructureManager,
        cluster_guid: &Guid,
        member_guid: &Guid,
    ) -> Result<(), SdkError> {
        self.clear_related_asset(
            user_id,
            manager,
            [(cluster_guid, "clusterGUID"), (member_guid, "memberGUID")],
            cluster_member_path(cluster_guid, member_guid),
        )
        .await
    }

    /// Page through the members of a host cluster.
    pub async fn cluster_members(
        &self,
        user_id: &str,
        cluster_guid: &Guid,
        start_from: u32,
        page_size: u32,
    ) -> Result<Vec<Host>, SdkError> {
        self.related_elements::<HostProperties>(
            user_id,
            (cluster_guid, "clusterGUID"),
            format!("hosts/{}/cluster-members", segment(cluster_guid)),
            start_from,
            page_size,
        )
        .await
    }
}

fn cluster_member_path(cluster_guid: &Guid, member_guid: &Guid) -> String {
    format!(
        "hosts/{}/cluster-members/{}",
        segment(cluster_guid),
        segment(member_guid)
    )
}

fn reject_self_membership(cluster_guid: &Guid, member_guid: &Guid) -> Result<(), SdkError> {
    if cluster_guid == member_guid {
        return Err(SdkError::invalid_parameter(
            "memberGUID",
            "a host cannot be a member of its own cluster",
        ));
    }
    Ok(())
}
