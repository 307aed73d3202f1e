//! Per-entity storage for attributes that are not first-class fields.
//!
//! Keys are generated extension names (or any other property the directory
//! returned that the entity type does not model). A key mapped to
//! `Value::Null` is declared but unset; an absent key is not part of the
//! entity's schema.

use super::EntityFamily;
use crate::schema::ExtensionSchema;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Open attribute map, flattened into the entity's JSON representation.
///
/// Iteration is in lexicographic key order, which is also the order used to
/// break ties when several keys share a suffix: the smallest matching key
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenAttributes(BTreeMap<String, Value>);

impl OpenAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// One unset entry per schema name admitted by `family`.
    pub fn seeded(schema: &ExtensionSchema, family: EntityFamily) -> Self {
        let mut attributes = Self::new();
        attributes.seed_missing(schema, family);
        attributes
    }

    /// Add unset entries for admitted schema names that are not present yet.
    ///
    /// Existing values are left untouched.
    pub fn seed_missing(&mut self, schema: &ExtensionSchema, family: EntityFamily) {
        for name in schema.names().filter(|name| family.admits(name)) {
            self.0.entry(name.to_string()).or_insert(Value::Null);
        }
    }

    /// First key whose lowercase form ends with the lowercase `suffix`.
    pub fn find_key(&self, suffix: &str) -> Option<&str> {
        let suffix = suffix.to_lowercase();
        self.0
            .keys()
            .find(|key| key.to_lowercase().ends_with(&suffix))
            .map(String::as_str)
    }

    /// Value of the first key matching `suffix`.
    ///
    /// Returns `None` when nothing matches or the matched entry is unset.
    /// Non-string JSON values are rendered as JSON text.
    pub fn get_by_suffix(&self, suffix: &str) -> Option<String> {
        let key = self.find_key(suffix)?;
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Replace the value of the first key matching `suffix`.
    ///
    /// Returns `false` and leaves the map unchanged when no key matches.
    pub fn set_by_suffix(&mut self, suffix: &str, value: impl Into<Value>) -> bool {
        let Some(key) = self.find_key(suffix).map(str::to_string) else {
            debug!("No open attribute ends with '{}', write ignored", suffix);
            return false;
        };
        self.0.insert(key, value.into());
        true
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Exact-key insert, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
