//! User entity and its PATCH payload.

use super::{DirectoryEntity, EntityFamily, Group, OpenAttributes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical suffix of the customer identifier extension.
pub const CIDN_SUFFIX: &str = "cidn";
/// Logical suffix of the customer name extension.
pub const CUSTOMER_NAME_SUFFIX: &str = "CustomerName";
/// Creation type of every user created through this crate.
pub const LOCAL_ACCOUNT: &str = "LocalAccount";

fn local_account() -> String {
    LOCAL_ACCOUNT.to_string()
}

/// Sign-in identity of a local account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInName {
    #[serde(rename = "type")]
    pub sign_in_type: String,
    pub value: String,
}

impl SignInName {
    pub const EMAIL_ADDRESS: &'static str = "emailAddress";
    pub const USER_NAME: &'static str = "userName";

    pub fn email_address(value: impl Into<String>) -> Self {
        Self {
            sign_in_type: Self::EMAIL_ADDRESS.to_string(),
            value: value.into(),
        }
    }

    pub fn user_name(value: impl Into<String>) -> Self {
        Self {
            sign_in_type: Self::USER_NAME.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordProfile {
    pub password: Option<String>,
    #[serde(default)]
    pub force_change_password_next_login: bool,
}

/// A local-account user.
///
/// Properties the type does not model, including every extension attribute,
/// land in [`OpenAttributes`] on deserialization and are written back
/// unchanged on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub account_enabled: bool,
    #[serde(default)]
    pub sign_in_names: Vec<SignInName>,
    #[serde(default = "local_account")]
    pub creation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_profile: Option<PasswordProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default)]
    pub other_mails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facsimile_telephone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,

    /// Groups the user is a member of, filled by `list_users` expansion.
    #[serde(skip)]
    pub groups: Vec<Group>,

    #[serde(flatten)]
    pub open_attributes: OpenAttributes,
}

impl Default for User {
    fn default() -> Self {
        Self {
            object_id: None,
            object_type: None,
            deletion_timestamp: None,
            account_enabled: false,
            sign_in_names: Vec::new(),
            creation_type: local_account(),
            display_name: None,
            password_profile: None,
            city: None,
            country: None,
            state: None,
            street_address: None,
            postal_code: None,
            given_name: None,
            surname: None,
            mail: None,
            mobile: None,
            other_mails: Vec::new(),
            telephone_number: None,
            facsimile_telephone_number: None,
            preferred_language: None,
            groups: Vec::new(),
            open_attributes: OpenAttributes::new(),
        }
    }
}

impl User {
    /// Customer identifier, stored in the extension ending with `cidn`.
    pub fn cidn(&self) -> Option<String> {
        self.extension_value(CIDN_SUFFIX)
    }

    /// Returns `false` if the user's schema declares no `cidn` extension.
    pub fn set_cidn(&mut self, value: impl Into<String>) -> bool {
        self.set_extension_value(CIDN_SUFFIX, &value.into())
    }

    pub fn customer_name(&self) -> Option<String> {
        self.extension_value(CUSTOMER_NAME_SUFFIX)
    }

    pub fn set_customer_name(&mut self, value: impl Into<String>) -> bool {
        self.set_extension_value(CUSTOMER_NAME_SUFFIX, &value.into())
    }
}

impl DirectoryEntity for User {
    const FAMILY: EntityFamily = EntityFamily::User;

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

/// Partial user update sent as a PATCH body.
///
/// Only fields that are set are serialized. Extension attributes are written
/// by their full generated name, since an update carries no schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_mails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_profile: Option<PasswordProfile>,
    #[serde(flatten)]
    pub extensions: OpenAttributes,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an extension attribute by its generated name.
    pub fn with_extension(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(name, value);
        self
    }
}
