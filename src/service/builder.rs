//! Builder for [`DirectoryService`] instances.

use super::DirectoryService;
use crate::config::DEFAULT_EXTENSIONS_APP_PREFIX;
use crate::error::DirectoryResult;
use crate::registry::{ExtensionRegistry, RegistryCell};
use crate::transport::DirectoryTransport;
use log::info;
use std::sync::Arc;

/// Where the service gets its registry from.
#[derive(Debug)]
enum RegistrySource<'a> {
    Resolve,
    Shared(&'a RegistryCell),
    Ready(Arc<ExtensionRegistry>),
}

/// Configures how a [`DirectoryService`] resolves its extension registry.
///
/// ```rust,no_run
/// # use graph_directory::service::DirectoryService;
/// # use graph_directory::registry::RegistryCell;
/// # use graph_directory::transport::DirectoryTransport;
/// static REGISTRY: RegistryCell = RegistryCell::new();
///
/// # async fn example<T: DirectoryTransport>(transport: T) -> graph_directory::DirectoryResult<()> {
/// let service = DirectoryService::builder(transport)
///     .extensions_app_prefix("b2c-extensions-app")
///     .shared_registry(&REGISTRY)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DirectoryServiceBuilder<'a, T: DirectoryTransport> {
    transport: T,
    extensions_app_prefix: String,
    source: RegistrySource<'a>,
}

impl<'a, T: DirectoryTransport> DirectoryServiceBuilder<'a, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            extensions_app_prefix: DEFAULT_EXTENSIONS_APP_PREFIX.to_string(),
            source: RegistrySource::Resolve,
        }
    }

    /// Display-name prefix of the extensions application.
    pub fn extensions_app_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extensions_app_prefix = prefix.into();
        self
    }

    /// Resolve through a process-wide cell, reusing its registry if present.
    pub fn shared_registry(mut self, cell: &'a RegistryCell) -> Self {
        self.source = RegistrySource::Shared(cell);
        self
    }

    /// Skip resolution and use this registry.
    pub fn registry(mut self, registry: Arc<ExtensionRegistry>) -> Self {
        self.source = RegistrySource::Ready(registry);
        self
    }

    /// Resolve the registry (unless one was supplied) and create the service.
    pub async fn build(self) -> DirectoryResult<DirectoryService<T>> {
        let registry = match self.source {
            RegistrySource::Ready(registry) => registry,
            RegistrySource::Shared(cell) => {
                cell.get_or_initialize(&self.transport, &self.extensions_app_prefix)
                    .await?
            }
            RegistrySource::Resolve => Arc::new(
                ExtensionRegistry::initialize(&self.transport, &self.extensions_app_prefix)
                    .await?,
            ),
        };

        info!(
            "Directory service ready with {} extension properties",
            registry.schema().len()
        );
        Ok(DirectoryService::with_registry(self.transport, registry))
    }
}
