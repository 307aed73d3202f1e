//! Directory payloads shaped like real Graph API responses.

use super::{Reply, ScriptedTransport};
use graph_directory::config::DEFAULT_EXTENSIONS_APP_PREFIX;
use serde_json::{Value, json};

pub const APP_OBJECT_ID: &str = "506ee052-5f01-44ff-bf02-610584a5f6a0";
pub const CIDN_KEY: &str = "extension_0b7e1c2d4f6a48e1a3c5d7e9f1b3d5f7_cidn";
pub const CUSTOMER_NAME_KEY: &str = "extension_0b7e1c2d4f6a48e1a3c5d7e9f1b3d5f7_CustomerName";
pub const GROUP_CIDN_KEY: &str = "extension_0b7e1c2d4f6a48e1a3c5d7e9f1b3d5f7_groupCIDN";

pub const TEST_USER_ID: &str = "c3a8f1e2-7b4d-4e9a-8f6c-2d1b0a9e8f7d";
pub const SECOND_USER_ID: &str = "5d9e2f14-1a3b-4c6d-9e8f-0a1b2c3d4e5f";
pub const TEST_GROUP_ID: &str = "9f8e7d6c-5b4a-4392-8170-6f5e4d3c2b1a";

pub fn find_applications_route() -> String {
    format!("find_applications:{}", DEFAULT_EXTENSIONS_APP_PREFIX)
}

pub fn extension_properties_route() -> String {
    format!("extension_properties:{}", APP_OBJECT_ID)
}

pub fn odata(value: Value) -> String {
    json!({
        "odata.metadata": "https://graph.windows.net/contoso.onmicrosoft.com/$metadata#directoryObjects",
        "value": value
    })
    .to_string()
}

pub fn applications() -> String {
    odata(json!([{
        "odata.type": "Microsoft.DirectoryServices.Application",
        "objectType": "Application",
        "objectId": APP_OBJECT_ID,
        "appId": "a1b2c3d4-0000-4000-8000-000000000001",
        "displayName": "b2c-extensions-app. Do not modify. Used by AADB2C for storing user data."
    }]))
}

fn extension_property(name: &str) -> Value {
    json!({
        "odata.type": "Microsoft.DirectoryServices.ExtensionProperty",
        "objectType": "ExtensionProperty",
        "objectId": format!("ext-{}", name.len()),
        "name": name,
        "appDisplayName": "b2c-extensions-app",
        "dataType": "String",
        "isSyncedFromOnPremises": false,
        "targetObjects": ["User"]
    })
}

/// The user extensions only.
pub fn user_extension_properties() -> String {
    odata(json!([
        extension_property(CIDN_KEY),
        extension_property(CUSTOMER_NAME_KEY)
    ]))
}

/// User extensions plus the group identifier extension.
pub fn extension_properties() -> String {
    odata(json!([
        extension_property(CIDN_KEY),
        extension_property(CUSTOMER_NAME_KEY),
        extension_property(GROUP_CIDN_KEY)
    ]))
}

pub fn test_user() -> Value {
    json!({
        "odata.type": "Microsoft.DirectoryServices.User",
        "objectType": "User",
        "objectId": TEST_USER_ID,
        "deletionTimestamp": null,
        "accountEnabled": true,
        "creationType": "LocalAccount",
        "displayName": "User Test",
        "signInNames": [{ "type": "emailAddress", "value": "user.test@example.com" }],
        "givenName": "User",
        "surname": "Test",
        "otherMails": [],
        CIDN_KEY: "112122323233232",
        CUSTOMER_NAME_KEY: "Test Company"
    })
}

pub fn second_user() -> Value {
    json!({
        "objectType": "User",
        "objectId": SECOND_USER_ID,
        "accountEnabled": false,
        "creationType": "LocalAccount",
        "displayName": "Second User",
        "signInNames": [{ "type": "userName", "value": "second" }],
        CIDN_KEY: "998877"
    })
}

pub fn users() -> String {
    odata(json!([test_user(), second_user()]))
}

pub fn test_group() -> Value {
    json!({
        "odata.type": "Microsoft.DirectoryServices.Group",
        "objectType": "Group",
        "objectId": TEST_GROUP_ID,
        "displayName": "Customers",
        "description": "Customer accounts",
        "mailEnabled": false,
        "mailNickname": "MailNickNameIsNotRequired",
        "securityEnabled": true,
        GROUP_CIDN_KEY: "4455"
    })
}

pub fn member_of(groups: Vec<Value>) -> String {
    odata(Value::Array(groups))
}

pub fn directory_role() -> Value {
    json!({
        "objectType": "Role",
        "objectId": "f0e1d2c3-b4a5-4697-8899-aabbccddeeff",
        "displayName": "Helpdesk Administrator"
    })
}

pub fn member_links(object_ids: &[&str]) -> String {
    let links: Vec<Value> = object_ids
        .iter()
        .map(|id| {
            json!({
                "url": format!(
                    "https://graph.windows.net/contoso.onmicrosoft.com/directoryObjects/{}/Microsoft.DirectoryServices.User",
                    id
                )
            })
        })
        .collect();
    json!({
        "odata.metadata": "https://graph.windows.net/contoso.onmicrosoft.com/$metadata#directoryObjects/$links/members",
        "value": links
    })
    .to_string()
}

/// A transport that resolves the full extension schema.
pub fn resolvable_transport() -> ScriptedTransport {
    ScriptedTransport::new()
        .with(find_applications_route(), Reply::body(applications()))
        .with(
            extension_properties_route(),
            Reply::body(extension_properties()),
        )
}
