//! Resource paths and query fragments of the Graph API.
//!
//! Paths are relative to `{graph_base_url}{tenant_id}`.

pub const USERS: &str = "/users";
pub const GROUPS: &str = "/groups";
pub const APPLICATIONS: &str = "/applications";
pub const EXTENSION_PROPERTIES: &str = "/extensionProperties";
pub const DIRECTORY_OBJECTS: &str = "/directoryObjects";

pub fn user(object_id: &str) -> String {
    format!("{USERS}/{object_id}")
}

pub fn user_member_of(object_id: &str) -> String {
    format!("{USERS}/{object_id}/memberOf")
}

pub fn group(object_id: &str) -> String {
    format!("{GROUPS}/{object_id}")
}

pub fn group_member_links(group_id: &str) -> String {
    format!("{GROUPS}/{group_id}/$links/members")
}

pub fn group_member_link(group_id: &str, member_id: &str) -> String {
    format!("{GROUPS}/{group_id}/$links/members/{member_id}")
}

pub fn extension_properties(application_object_id: &str) -> String {
    format!("{APPLICATIONS}/{application_object_id}{EXTENSION_PROPERTIES}")
}

pub fn directory_object(object_id: &str) -> String {
    format!("{DIRECTORY_OBJECTS}/{object_id}")
}

/// OData string literal: single quotes are doubled.
fn odata_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Filter selecting applications by display-name prefix.
pub fn applications_by_prefix_filter(prefix: &str) -> String {
    format!("$filter=startswith(displayName, {})", odata_literal(prefix))
}

/// Filter selecting users by sign-in name.
pub fn users_by_sign_in_name_filter(sign_in_name: &str) -> String {
    format!(
        "$filter=signInNames/any(x:x/value eq {})",
        odata_literal(sign_in_name)
    )
}
