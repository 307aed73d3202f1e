//! User operations.

use super::DirectoryService;
use crate::entity::{Group, User, UserUpdate};
use crate::error::DirectoryResult;
use crate::response::{ResultEnvelope, StatusCode};
use crate::transport::DirectoryTransport;
use log::{debug, info, warn};

/// `objectType` of groups in a `memberOf` listing, which also contains roles.
const GROUP_OBJECT_TYPE: &str = "Group";

impl<T: DirectoryTransport> DirectoryService<T> {
    /// List users, optionally attaching each user's groups.
    ///
    /// Group expansion issues one `memberOf` call per user, in order. A
    /// failure of the listing itself is reported in the envelope; a failure
    /// of any expansion call is returned as `Err`.
    pub async fn list_users(
        &self,
        query: Option<&str>,
        expand_groups: bool,
    ) -> DirectoryResult<ResultEnvelope<Vec<User>>> {
        info!("Listing users (expand groups: {})", expand_groups);
        let body = or_envelope!(self.transport.list_users(query).await);
        let mut users: Vec<User> = self.parse_entities(&body)?;

        if expand_groups {
            for user in &mut users {
                let Some(object_id) = user.object_id.clone() else {
                    warn!("Skipping group expansion for a user without objectId");
                    continue;
                };
                let body = self.transport.get_user_member_of(&object_id).await?;
                user.groups = self.parse_member_of(&body)?;
            }
        }

        debug!("Listed {} users", users.len());
        Ok(ResultEnvelope::success(StatusCode::OK, users))
    }

    /// Fetch one user. Every failure is returned as `Err`.
    pub async fn get_user(&self, object_id: &str) -> DirectoryResult<User> {
        debug!("Fetching user '{}'", object_id);
        let body = self.transport.get_user(object_id).await?;
        self.parse_entity(&body)
    }

    /// First user signing in with `sign_in_name`, if any.
    pub async fn get_user_by_sign_in_name(&self, sign_in_name: &str) -> DirectoryResult<Option<User>> {
        debug!("Looking up user by sign-in name");
        let body = self
            .transport
            .find_users_by_sign_in_name(sign_in_name)
            .await?;
        let users: Vec<User> = self.parse_entities(&body)?;
        Ok(users.into_iter().next())
    }

    /// Groups the user is a direct member of.
    pub async fn get_user_groups(
        &self,
        object_id: &str,
    ) -> DirectoryResult<ResultEnvelope<Vec<Group>>> {
        debug!("Fetching groups of user '{}'", object_id);
        let body = or_envelope!(self.transport.get_user_member_of(object_id).await);
        let groups = self.parse_member_of(&body)?;
        Ok(ResultEnvelope::success(StatusCode::OK, groups))
    }

    /// Create a user; the envelope carries the user the directory returned.
    pub async fn add_user(&self, user: &User) -> DirectoryResult<ResultEnvelope<User>> {
        info!(
            "Creating user '{}'",
            user.display_name.as_deref().unwrap_or_default()
        );
        let payload = serde_json::to_string(user)?;
        let body = or_envelope!(self.transport.create_user(payload).await);
        let created: User = self.parse_entity(&body)?;
        Ok(ResultEnvelope::success(StatusCode::CREATED, created))
    }

    pub async fn update_user(&self, object_id: &str, update: &UserUpdate) -> DirectoryResult<()> {
        info!("Updating user '{}'", object_id);
        let payload = serde_json::to_string(update)?;
        self.transport.update_user(object_id, payload).await?;
        Ok(())
    }

    pub async fn delete_user(&self, object_id: &str) -> DirectoryResult<()> {
        info!("Deleting user '{}'", object_id);
        self.transport.delete_user(object_id).await?;
        Ok(())
    }

    /// Groups from a `memberOf` payload; directory roles are dropped.
    fn parse_member_of(&self, body: &str) -> DirectoryResult<Vec<Group>> {
        let groups: Vec<Group> = self.parse_entities(body)?;
        Ok(groups
            .into_iter()
            .filter(|g| g.object_type.as_deref().is_none_or(|t| t == GROUP_OBJECT_TYPE))
            .collect())
    }
}
