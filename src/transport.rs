//! Transport abstraction between the directory service and the Graph API.
//!
//! A [`DirectoryTransport`] performs one HTTP verb against one logical
//! endpoint and hands back the raw response body. It knows nothing about
//! entities or extension schemas; the service layer owns deserialization and
//! error translation.
//!
//! Implementations must fail with [`DirectoryError::Transport`] for non-2xx
//! responses so the service can tell directory rejections apart from
//! connectivity, authentication or local faults.
//!
//! With the `http` feature enabled, [`graph::GraphTransport`] talks to the
//! Graph API over HTTPS.
//!
//! [`DirectoryError::Transport`]: crate::error::DirectoryError::Transport

pub mod endpoints;

#[cfg(feature = "http")]
pub mod auth;
#[cfg(feature = "http")]
pub mod graph;

use crate::error::DirectoryResult;
use std::future::Future;

/// Raw directory operations, one per logical endpoint.
///
/// Every method resolves to the response body as text. Bodies sent to the
/// directory are JSON produced by the caller.
pub trait DirectoryTransport: Send + Sync {
    /// List users, optionally narrowed by an OData query string
    /// (e.g. `$filter=accountEnabled eq true`).
    fn list_users(
        &self,
        query: Option<&str>,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn get_user(&self, object_id: &str) -> impl Future<Output = DirectoryResult<String>> + Send;

    /// List users that sign in with `sign_in_name`.
    fn find_users_by_sign_in_name(
        &self,
        sign_in_name: &str,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    /// Groups and roles the user is a direct member of.
    fn get_user_member_of(
        &self,
        object_id: &str,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    /// Create a user; resolves to the created user.
    fn create_user(&self, body: String) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn update_user(
        &self,
        object_id: &str,
        body: String,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn delete_user(&self, object_id: &str) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn list_groups(
        &self,
        query: Option<&str>,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn get_group(&self, object_id: &str) -> impl Future<Output = DirectoryResult<String>> + Send;

    /// Member links of a group.
    fn get_group_members(
        &self,
        object_id: &str,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn create_group(&self, body: String) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn update_group(
        &self,
        object_id: &str,
        body: String,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn delete_group(&self, object_id: &str) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn add_group_member(
        &self,
        group_id: &str,
        member_id: &str,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    fn remove_group_member(
        &self,
        group_id: &str,
        member_id: &str,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    /// Applications whose display name starts with `display_name_prefix`.
    fn find_applications(
        &self,
        display_name_prefix: &str,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;

    /// Extension properties declared on an application.
    fn get_extension_properties(
        &self,
        application_object_id: &str,
    ) -> impl Future<Output = DirectoryResult<String>> + Send;
}
