//! Directory entities and the extension binder shared by them.
//!
//! [`User`] and [`Group`] are independent types that both implement
//! [`DirectoryEntity`]. The trait exposes the entity's [`OpenAttributes`] and
//! provides the suffix-based accessors, so named extension attributes such as
//! `User::cidn` resolve against whatever generated key the tenant's schema
//! declared.
//!
//! # Example
//!
//! ```rust
//! use graph_directory::entity::{DirectoryEntity, User};
//! use graph_directory::schema::{ExtensionProperty, ExtensionSchema};
//!
//! let schema = ExtensionSchema::new(vec![
//!     ExtensionProperty::new("extension_1f2e3d_cidn"),
//!     ExtensionProperty::new("extension_1f2e3d_groupCIDN"),
//! ])
//! .unwrap();
//!
//! let mut user = User::from_schema(&schema);
//! assert!(user.set_cidn("5555555"));
//! assert_eq!(user.cidn().as_deref(), Some("5555555"));
//! assert!(!user.open_attributes().contains_key("extension_1f2e3d_groupCIDN"));
//! ```

pub mod group;
pub mod open_attributes;
pub mod user;

pub use group::{Group, GroupUpdate};
pub use open_attributes::OpenAttributes;
pub use user::{PasswordProfile, SignInName, User, UserUpdate};

use crate::schema::ExtensionSchema;
use chrono::{DateTime, Utc};

/// Substring that reserves an extension name for groups.
pub const GROUP_MARKER: &str = "group";

/// Which entity family an extension name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityFamily {
    User,
    Group,
}

impl EntityFamily {
    /// Partition rule: names containing [`GROUP_MARKER`] belong to groups,
    /// every other name belongs to users.
    pub fn admits(self, name: &str) -> bool {
        let is_group_name = name.contains(GROUP_MARKER);
        match self {
            EntityFamily::User => !is_group_name,
            EntityFamily::Group => is_group_name,
        }
    }
}

/// Capability shared by every directory object.
pub trait DirectoryEntity {
    /// The family whose extension names this entity is seeded with.
    const FAMILY: EntityFamily;

    fn object_id(&self) -> Option<&str>;

    fn object_type(&self) -> Option<&str>;

    fn deletion_timestamp(&self) -> Option<DateTime<Utc>>;

    fn open_attributes(&self) -> &OpenAttributes;

    fn open_attributes_mut(&mut self) -> &mut OpenAttributes;

    /// A blank entity whose open attributes are seeded from `schema`.
    fn from_schema(schema: &ExtensionSchema) -> Self
    where
        Self: Default,
    {
        let mut entity = Self::default();
        *entity.open_attributes_mut() = OpenAttributes::seeded(schema, Self::FAMILY);
        entity
    }

    /// Seed admitted schema names that the entity does not carry yet.
    fn apply_schema(&mut self, schema: &ExtensionSchema) {
        self.open_attributes_mut().seed_missing(schema, Self::FAMILY);
    }

    /// Read an extension attribute by logical suffix.
    fn extension_value(&self, suffix: &str) -> Option<String> {
        self.open_attributes().get_by_suffix(suffix)
    }

    /// Write an extension attribute by logical suffix.
    ///
    /// Returns `false` when the entity carries no matching key; the write is
    /// then dropped.
    fn set_extension_value(&mut self, suffix: &str, value: &str) -> bool {
        self.open_attributes_mut().set_by_suffix(suffix, value)
    }
}
