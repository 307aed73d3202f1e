//! Extension schema registry.
//!
//! The registry is resolved once, from two dependent directory calls:
//!
//! 1. find the extensions application by display-name prefix and take its
//!    object id;
//! 2. fetch the extension properties declared on that application.
//!
//! The result is an immutable [`ExtensionRegistry`] that services share
//! through an `Arc`. Refreshing means resolving a new registry; an existing
//! one never changes. [`RegistryCell`] holds one registry for the whole
//! process and serializes concurrent first initializations.

use crate::error::{DirectoryError, DirectoryResult};
use crate::response::ODataResponse;
use crate::schema::{ExtensionProperty, ExtensionSchema};
use crate::transport::DirectoryTransport;
use log::{debug, info};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::OnceCell;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationRecord {
    #[serde(default)]
    object_id: Option<String>,
}

/// Resolved extension schema of one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRegistry {
    application_object_id: String,
    schema: ExtensionSchema,
}

impl ExtensionRegistry {
    /// Wrap an already resolved schema.
    pub fn new(application_object_id: impl Into<String>, schema: ExtensionSchema) -> Self {
        Self {
            application_object_id: application_object_id.into(),
            schema,
        }
    }

    /// Resolve the extensions application and then its schema.
    pub async fn initialize<T: DirectoryTransport>(
        transport: &T,
        extensions_app_prefix: &str,
    ) -> DirectoryResult<Self> {
        let application_object_id =
            resolve_application_object_id(transport, extensions_app_prefix).await?;
        let schema = resolve_extension_schema(transport, &application_object_id).await?;

        info!(
            "Resolved {} extension properties for application '{}'",
            schema.len(),
            application_object_id
        );
        Ok(Self::new(application_object_id, schema))
    }

    pub fn application_object_id(&self) -> &str {
        &self.application_object_id
    }

    pub fn schema(&self) -> &ExtensionSchema {
        &self.schema
    }
}

/// Object id of the first application whose display name starts with `prefix`.
///
/// Every failure is a [`DirectoryError::SchemaResolution`]: a failed lookup
/// (carrying the directory status when there was a response), an empty
/// result, or a record without an object id.
pub async fn resolve_application_object_id<T: DirectoryTransport>(
    transport: &T,
    prefix: &str,
) -> DirectoryResult<String> {
    debug!("Looking up extensions application '{}'", prefix);
    let body = transport
        .find_applications(prefix)
        .await
        .map_err(|e| match e {
            DirectoryError::Transport(error) => DirectoryError::schema_resolution_with_status(
                format!("Application lookup for '{}' failed: {}", prefix, error.message),
                error.status,
            ),
            resolution @ DirectoryError::SchemaResolution { .. } => resolution,
            other => DirectoryError::schema_resolution(format!(
                "Application lookup for '{}' failed: {}",
                prefix, other
            )),
        })?;

    let response: ODataResponse<Vec<ApplicationRecord>> = serde_json::from_str(&body)
        .map_err(|e| {
            DirectoryError::schema_resolution(format!("Malformed application response: {}", e))
        })?;

    response
        .value
        .into_iter()
        .next()
        .ok_or_else(|| {
            DirectoryError::schema_resolution(format!(
                "No application with a display name starting with '{}'",
                prefix
            ))
        })?
        .object_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DirectoryError::schema_resolution("Application record has no objectId"))
}

/// Extension properties declared on an application.
pub async fn resolve_extension_schema<T: DirectoryTransport>(
    transport: &T,
    application_object_id: &str,
) -> DirectoryResult<ExtensionSchema> {
    debug!(
        "Fetching extension properties of application '{}'",
        application_object_id
    );
    let body = transport
        .get_extension_properties(application_object_id)
        .await?;

    let response: ODataResponse<Vec<ExtensionProperty>> = serde_json::from_str(&body)
        .map_err(|e| {
            DirectoryError::schema_resolution(format!(
                "Malformed extension properties response: {}",
                e
            ))
        })?;

    ExtensionSchema::new(response.value)
}

/// Process-wide slot for one [`ExtensionRegistry`].
///
/// The first successful initialization wins. Callers arriving while it runs
/// wait for it and then share the result; a failed initialization leaves the
/// cell empty so a later call can retry.
#[derive(Debug, Default)]
pub struct RegistryCell {
    cell: OnceCell<Arc<ExtensionRegistry>>,
}

impl RegistryCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// The registry, if one has been initialized.
    pub fn get(&self) -> Option<Arc<ExtensionRegistry>> {
        self.cell.get().cloned()
    }

    /// Return the registry, resolving it through `transport` on first use.
    pub async fn get_or_initialize<T: DirectoryTransport>(
        &self,
        transport: &T,
        extensions_app_prefix: &str,
    ) -> DirectoryResult<Arc<ExtensionRegistry>> {
        self.cell
            .get_or_try_init(|| async {
                ExtensionRegistry::initialize(transport, extensions_app_prefix)
                    .await
                    .map(Arc::new)
            })
            .await
            .cloned()
    }
}
