//! Directory service orchestrating transport calls into entity operations.
//!
//! A [`DirectoryService`] only exists once its [`ExtensionRegistry`] has been
//! resolved, so every operation can seed entities from the schema without
//! further transport calls.
//!
//! # Error contract
//!
//! Two styles coexist:
//!
//! * **Envelope operations** (`list_users`, `get_user_groups`, `add_user`,
//!   `list_groups`, `add_group`, `update_group`) return
//!   `Ok(ResultEnvelope)` for both success and a *primary* transport
//!   failure. Every other failure (malformed payloads, failures of the
//!   per-item calls that hydrate a list) is returned as `Err`.
//! * **Raw operations** (`get_user`, `get_user_by_sign_in_name`,
//!   `update_user`, `delete_user`, `get_group`, `delete_group`,
//!   `add_group_member`, `delete_group_member`) return every failure,
//!   including transport failures, as `Err`.

/// Unwrap a transport result or return its failure as an envelope.
macro_rules! or_envelope {
    ($result:expr) => {
        match $crate::service::split_transport_error($result)? {
            Ok(body) => body,
            Err(error) => {
                log::warn!("Directory request failed: {}", error);
                return Ok($crate::response::ResultEnvelope::from(error));
            }
        }
    };
}

mod builder;
mod groups;
mod users;

pub use builder::DirectoryServiceBuilder;

use crate::entity::{DirectoryEntity, Group, User};
use crate::error::{DirectoryError, DirectoryResult, TransportError};
use crate::registry::{self, ExtensionRegistry};
use crate::response::ODataResponse;
use crate::schema::ExtensionSchema;
use crate::transport::DirectoryTransport;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Suffix identifying the user customer-identifier extension by name.
const USER_EXTENSION_SUFFIX: &str = "_cidn";

/// Entity-level operations over a [`DirectoryTransport`].
#[derive(Debug)]
pub struct DirectoryService<T: DirectoryTransport> {
    transport: T,
    registry: Arc<ExtensionRegistry>,
}

impl<T: DirectoryTransport> DirectoryService<T> {
    /// Resolve the extension registry with the default application prefix.
    pub async fn create(transport: T) -> DirectoryResult<Self> {
        Self::builder(transport).build().await
    }

    /// Configure a service before resolving it.
    pub fn builder<'a>(transport: T) -> DirectoryServiceBuilder<'a, T> {
        DirectoryServiceBuilder::new(transport)
    }

    /// Use an already resolved registry; no transport calls are made.
    pub fn with_registry(transport: T, registry: Arc<ExtensionRegistry>) -> Self {
        Self {
            transport,
            registry,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn registry(&self) -> &Arc<ExtensionRegistry> {
        &self.registry
    }

    pub fn schema(&self) -> &ExtensionSchema {
        self.registry.schema()
    }

    pub fn application_object_id(&self) -> &str {
        self.registry.application_object_id()
    }

    /// Look up the extensions application through this service's transport.
    pub async fn resolve_application_object_id(&self, prefix: &str) -> DirectoryResult<String> {
        registry::resolve_application_object_id(&self.transport, prefix).await
    }

    /// Fetch an application's extension schema through this service's transport.
    pub async fn resolve_extension_schema(
        &self,
        application_object_id: &str,
    ) -> DirectoryResult<ExtensionSchema> {
        registry::resolve_extension_schema(&self.transport, application_object_id).await
    }

    /// Generated name of the user customer-identifier extension.
    pub fn user_extension_property_name(&self) -> Option<&str> {
        self.schema()
            .find_by_suffix(USER_EXTENSION_SUFFIX)
            .map(|p| p.name.as_str())
    }

    /// Generated name of the first group extension.
    pub fn group_extension_property_name(&self) -> Option<&str> {
        self.schema()
            .first_containing(crate::entity::GROUP_MARKER)
            .map(|p| p.name.as_str())
    }

    /// A user seeded with every user extension of the schema, all unset.
    pub fn new_blank_user(&self) -> User {
        User::from_schema(self.schema())
    }

    /// A group seeded with every group extension of the schema, all unset.
    pub fn new_blank_group(&self) -> Group {
        Group::from_schema(self.schema())
    }

    /// Deserialize one entity and seed the extensions it does not carry.
    fn parse_entity<E>(&self, body: &str) -> DirectoryResult<E>
    where
        E: DirectoryEntity + DeserializeOwned,
    {
        let mut entity: E = serde_json::from_str(body)?;
        entity.apply_schema(self.schema());
        Ok(entity)
    }

    /// Deserialize a collection payload of entities.
    fn parse_entities<E>(&self, body: &str) -> DirectoryResult<Vec<E>>
    where
        E: DirectoryEntity + DeserializeOwned,
    {
        let response: ODataResponse<Vec<E>> = serde_json::from_str(body)?;
        let mut entities = response.value;
        for entity in &mut entities {
            entity.apply_schema(self.schema());
        }
        Ok(entities)
    }
}

/// Separate transport failures from every other error.
///
/// The outer `Result` carries failures that must reach the caller unchanged;
/// the inner one carries the transport failure an envelope absorbs.
fn split_transport_error<V>(
    result: DirectoryResult<V>,
) -> DirectoryResult<Result<V, TransportError>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(DirectoryError::Transport(error)) => Ok(Err(error)),
        Err(other) => Err(other),
    }
}
