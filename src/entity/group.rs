//! Security group entity and its PATCH payload.

use super::{DirectoryEntity, EntityFamily, OpenAttributes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical suffix of the group customer identifier extension.
pub const GROUP_CIDN_SUFFIX: &str = "groupCIDN";
/// Mail nickname sent for every group; the directory requires one.
pub const DEFAULT_MAIL_NICKNAME: &str = "MailNickNameIsNotRequired";

fn default_mail_nickname() -> String {
    DEFAULT_MAIL_NICKNAME.to_string()
}

fn default_true() -> bool {
    true
}

/// A security group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_mail_nickname")]
    pub mail_nickname: String,
    #[serde(default)]
    pub mail_enabled: bool,
    #[serde(default = "default_true")]
    pub security_enabled: bool,

    /// Member object URLs, filled by `list_groups`.
    #[serde(skip)]
    pub members: Vec<String>,

    #[serde(flatten)]
    pub open_attributes: OpenAttributes,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            object_id: None,
            object_type: None,
            deletion_timestamp: None,
            display_name: None,
            description: None,
            mail_nickname: default_mail_nickname(),
            mail_enabled: false,
            security_enabled: true,
            members: Vec::new(),
            open_attributes: OpenAttributes::new(),
        }
    }
}

impl Group {
    pub fn cidn(&self) -> Option<String> {
        self.extension_value(GROUP_CIDN_SUFFIX)
    }

    /// Returns `false` if the group's schema declares no `groupCIDN` extension.
    pub fn set_cidn(&mut self, value: impl Into<String>) -> bool {
        self.set_extension_value(GROUP_CIDN_SUFFIX, &value.into())
    }
}

impl DirectoryEntity for Group {
    const FAMILY: EntityFamily = EntityFamily::Group;

    fn object_id(&self) -> Option<&str> {
        self.object_id.as_deref()
    }

    fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    fn deletion_timestamp(&self) -> Option<DateTime<Utc>> {
        self.deletion_timestamp
    }

    fn open_attributes(&self) -> &OpenAttributes {
        &self.open_attributes
    }

    fn open_attributes_mut(&mut self) -> &mut OpenAttributes {
        &mut self.open_attributes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extensions: OpenAttributes,
}

impl GroupUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(name, value);
        self
    }
}
