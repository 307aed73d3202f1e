//! Azure AD B2C directory client for Rust.
//!
//! Manages users, groups and group membership through the Graph directory
//! API, with typed access to the tenant's custom extension attributes.
//!
//! # Core Components
//!
//! - [`DirectoryService`] - Entity operations over a transport
//! - [`ExtensionRegistry`] - The tenant's resolved extension schema
//! - [`DirectoryEntity`] - Extension binding shared by [`User`] and [`Group`]
//! - [`DirectoryTransport`] - Trait for the raw directory calls
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use graph_directory::{DirectoryService, DirectoryTransport};
//!
//! # async fn example<T: DirectoryTransport>(transport: T) -> Result<(), Box<dyn std::error::Error>> {
//! let service = DirectoryService::create(transport).await?;
//!
//! let mut user = service.new_blank_user();
//! user.display_name = Some("User Test".to_string());
//! user.set_cidn("112122323233232");
//!
//! let created = service.add_user(&user).await?;
//! assert!(created.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! The HTTPS transport lives behind the `http` feature as
//! `transport::graph::GraphTransport`.

pub mod config;
pub mod entity;
pub mod error;
pub mod registry;
pub mod response;
pub mod schema;
pub mod service;
pub mod transport;

// Re-export commonly used types for convenience
pub use config::DirectoryConfig;
pub use entity::{DirectoryEntity, Group, GroupUpdate, OpenAttributes, User, UserUpdate};
pub use error::{DirectoryError, DirectoryResult, TransportError};
pub use registry::{ExtensionRegistry, RegistryCell};
pub use response::{ResultEnvelope, StatusCode};
pub use schema::{ExtensionProperty, ExtensionSchema};
pub use service::{DirectoryService, DirectoryServiceBuilder};
pub use transport::DirectoryTransport;
