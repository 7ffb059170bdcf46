use crate::FormField;
use serde::{Deserialize, Serialize};

/// Value stored under a node configuration key
///
/// Serialized without a tag so that node data round-trips as the plain JSON
/// the editor stores (`"prompt": "..."`, `"memory": true`, `"fields": [...]`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Flag(bool),
    Fields(Vec<FormField>),
    Json(serde_json::Value),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&[FormField]> {
        match self {
            ConfigValue::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Empty text, an unset flag and an empty field list count as empty
    pub fn is_empty(&self) -> bool {
        match self {
            ConfigValue::Text(s) => s.is_empty(),
            ConfigValue::Flag(b) => !b,
            ConfigValue::Fields(fields) => fields.is_empty(),
            ConfigValue::Json(j) => j.is_null(),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Flag(b)
    }
}

impl From<Vec<FormField>> for ConfigValue {
    fn from(fields: Vec<FormField>) -> Self {
        ConfigValue::Fields(fields)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(j: serde_json::Value) -> Self {
        ConfigValue::Json(j)
    }
}
