//! Group and membership operations.

use super::DirectoryService;
use crate::entity::{Group, GroupUpdate};
use crate::error::DirectoryResult;
use crate::response::{DirectoryObjectLink, ODataResponse, ResultEnvelope, StatusCode};
use crate::transport::DirectoryTransport;
use log::{debug, info, warn};

impl<T: DirectoryTransport> DirectoryService<T> {
    /// List groups with their member links.
    ///
    /// Member links are fetched per group after the listing succeeds; a
    /// failure of one of those calls is returned as `Err`.
    pub async fn list_groups(
        &self,
        query: Option<&str>,
    ) -> DirectoryResult<ResultEnvelope<Vec<Group>>> {
        info!("Listing groups");
        let body = or_envelope!(self.transport.list_groups(query).await);
        let mut groups: Vec<Group> = self.parse_entities(&body)?;

        for group in &mut groups {
            let Some(object_id) = group.object_id.clone() else {
                warn!("Skipping member lookup for a group without objectId");
                continue;
            };
            let body = self.transport.get_group_members(&object_id).await?;
            let links: ODataResponse<Vec<DirectoryObjectLink>> = serde_json::from_str(&body)?;
            group.members = links.value.into_iter().map(|link| link.url).collect();
        }

        debug!("Listed {} groups", groups.len());
        Ok(ResultEnvelope::success(StatusCode::OK, groups))
    }

    pub async fn get_group(&self, object_id: &str) -> DirectoryResult<Group> {
        debug!("Fetching group '{}'", object_id);
        let body = self.transport.get_group(object_id).await?;
        self.parse_entity(&body)
    }

    pub async fn add_group(&self, group: &Group) -> DirectoryResult<ResultEnvelope<Group>> {
        info!(
            "Creating group '{}'",
            group.display_name.as_deref().unwrap_or_default()
        );
        let payload = serde_json::to_string(group)?;
        let body = or_envelope!(self.transport.create_group(payload).await);
        let created: Group = self.parse_entity(&body)?;
        Ok(ResultEnvelope::success(StatusCode::CREATED, created))
    }

    /// Patch a group. The directory usually answers with no body, in which
    /// case the envelope carries no data.
    pub async fn update_group(
        &self,
        object_id: &str,
        update: &GroupUpdate,
    ) -> DirectoryResult<ResultEnvelope<Group>> {
        info!("Updating group '{}'", object_id);
        let payload = serde_json::to_string(update)?;
        let body = or_envelope!(self.transport.update_group(object_id, payload).await);
        if body.trim().is_empty() {
            return Ok(ResultEnvelope::empty(StatusCode::OK));
        }
        let updated: Group = self.parse_entity(&body)?;
        Ok(ResultEnvelope::success(StatusCode::OK, updated))
    }

    pub async fn delete_group(&self, object_id: &str) -> DirectoryResult<()> {
        info!("Deleting group '{}'", object_id);
        self.transport.delete_group(object_id).await?;
        Ok(())
    }

    /// Add a user or group to `group_id`'s members.
    pub async fn add_group_member(&self, group_id: &str, member_id: &str) -> DirectoryResult<()> {
        info!("Adding '{}' to group '{}'", member_id, group_id);
        self.transport.add_group_member(group_id, member_id).await?;
        Ok(())
    }

    pub async fn delete_group_member(
        &self,
        group_id: &str,
        member_id: &str,
    ) -> DirectoryResult<()> {
        info!("Removing '{}' from group '{}'", member_id, group_id);
        self.transport
            .remove_group_member(group_id, member_id)
            .await?;
        Ok(())
    }
}
