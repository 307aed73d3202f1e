//! Extension attribute definitions and the per-application extension schema.
//!
//! An extension attribute is declared once on the tenant's extensions
//! application and receives a generated name such as
//! `extension_7d2b1f0c9a8e4b6d8f3a2c1b0e9d8c7f_cidn`. The generated prefix
//! differs per deployment, so accessors match on the logical suffix instead of
//! the full name.

use crate::error::{DirectoryError, DirectoryResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single extension attribute declared on the extensions application.
///
/// Identity is the generated `name`. Every field is owned, so `clone()`
/// produces a copy sharing no state with the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionProperty {
    #[serde(default)]
    pub app_display_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl ExtensionProperty {
    /// Create a definition with just a generated name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            app_display_name: None,
            name: name.into(),
            data_type: None,
            value: None,
        }
    }

    /// Set the declared data type (`String`, `Integer`, ...).
    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Set the display name of the declaring application.
    pub fn with_app_display_name(mut self, app_display_name: impl Into<String>) -> Self {
        self.app_display_name = Some(app_display_name.into());
        self
    }

    /// The logical name: everything after the last underscore.
    ///
    /// `extension_abc_CustomerName` yields `CustomerName`; an empty name
    /// yields `None`.
    pub fn display_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            return None;
        }
        match self.name.rfind('_') {
            Some(index) => Some(&self.name[index + 1..]),
            None => Some(&self.name),
        }
    }
}

/// Ordered set of extension definitions for one application.
///
/// Generated names are unique within a schema. The schema is built once and
/// is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSchema {
    properties: Vec<ExtensionProperty>,
}

impl ExtensionSchema {
    /// Build a schema, rejecting duplicate generated names.
    pub fn new(properties: Vec<ExtensionProperty>) -> DirectoryResult<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.name.as_str()) {
                return Err(DirectoryError::schema_resolution(format!(
                    "duplicate extension property '{}'",
                    property.name
                )));
            }
        }
        Ok(Self { properties })
    }

    /// A schema with no definitions.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ExtensionProperty> {
        self.properties.iter()
    }

    /// Generated names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }

    /// Look up a definition by its exact generated name.
    pub fn get(&self, name: &str) -> Option<&ExtensionProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// First definition whose name ends with `suffix`, ignoring case.
    pub fn find_by_suffix(&self, suffix: &str) -> Option<&ExtensionProperty> {
        let suffix = suffix.to_lowercase();
        self.properties
            .iter()
            .find(|p| p.name.to_lowercase().ends_with(&suffix))
    }

    /// First definition whose name contains `marker` (case-sensitive).
    pub fn first_containing(&self, marker: &str) -> Option<&ExtensionProperty> {
        self.properties.iter().find(|p| p.name.contains(marker))
    }
}

impl<'a> IntoIterator for &'a ExtensionSchema {
    type Item = &'a ExtensionProperty;
    type IntoIter = std::slice::Iter<'a, ExtensionProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> ExtensionSchema {
        ExtensionSchema::new(vec![
            ExtensionProperty::new("extension_abc_cidn").with_data_type("String"),
            ExtensionProperty::new("extension_abc_CustomerName"),
            ExtensionProperty::new("extension_abc_groupCIDN"),
        ])
        .unwrap()
    }

    #[test]
    fn test_display_name_is_last_segment() {
        let property = ExtensionProperty::new("extension_abc_CustomerName");
        assert_eq!(property.display_name(), Some("CustomerName"));

        let bare = ExtensionProperty::new("plain");
        assert_eq!(bare.display_name(), Some("plain"));

        let empty = ExtensionProperty::new("");
        assert_eq!(empty.display_name(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ExtensionProperty::new("extension_abc_cidn").with_data_type("String");
        let mut copy = original.clone();
        copy.name.push_str("_changed");
        copy.value = Some("x".to_string());

        assert_eq!(original.name, "extension_abc_cidn");
        assert_eq!(original.value, None);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = ExtensionSchema::new(vec![
            ExtensionProperty::new("extension_abc_cidn"),
            ExtensionProperty::new("extension_abc_cidn"),
        ]);
        assert!(matches!(
            result,
            Err(DirectoryError::SchemaResolution { .. })
        ));
    }

    #[test]
    fn test_lookups() {
        let schema = sample_schema();
        assert_eq!(schema.len(), 3);
        assert_eq!(
            schema.find_by_suffix("_CIDN").map(|p| p.name.as_str()),
            Some("extension_abc_cidn")
        );
        assert_eq!(
            schema.first_containing("group").map(|p| p.name.as_str()),
            Some("extension_abc_groupCIDN")
        );
        assert!(schema.get("extension_abc_CustomerName").is_some());
        assert!(schema.find_by_suffix("missing").is_none());
    }

    #[test]
    fn test_deserialize_graph_payload() {
        let property: ExtensionProperty = serde_json::from_value(json!({
            "odata.type": "Microsoft.DirectoryServices.ExtensionProperty",
            "objectType": "ExtensionProperty",
            "objectId": "0b4b1e8f-6d3c-4b9a-9a1e-3f2c1d0e9b8a",
            "appDisplayName": "",
            "name": "extension_abc_cidn",
            "dataType": "String",
            "isSyncedFromOnPremises": false,
            "targetObjects": ["User"]
        }))
        .unwrap();
        assert_eq!(property.name, "extension_abc_cidn");
        assert_eq!(property.data_type.as_deref(), Some("String"));
        assert_eq!(property.value, None);
    }
}
