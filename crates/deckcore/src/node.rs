use crate::ConfigValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type NodeId = String;

/// Action kind of a node, serialized as its plain type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    ResendEmail,
    Telegram,
    Gemini,
    Slack,
    Form,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::ResendEmail => "ResendEmail",
            NodeKind::Telegram => "Telegram",
            NodeKind::Gemini => "Gemini",
            NodeKind::Slack => "Slack",
            NodeKind::Form => "Form",
            NodeKind::Other(tag) => tag,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "ResendEmail" => NodeKind::ResendEmail,
            "Telegram" => NodeKind::Telegram,
            "Gemini" => NodeKind::Gemini,
            "Slack" => NodeKind::Slack,
            "Form" => NodeKind::Form,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        NodeKind::from(tag.as_str())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node as placed on the editor canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, kind: impl Into<NodeKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            data: NodeData::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.data.label = Some(label.into());
        self
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.data.config.insert(key.into(), value.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.data.output = Some(output.into());
        self
    }

    pub fn with_credentials(mut self, credentials_id: impl Into<String>) -> Self {
        self.data.credentials_id = Some(credentials_id.into());
        self
    }

    /// Text shown for the node in variable labels
    pub fn display_name(&self) -> &str {
        match self.data.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => self.kind.as_str(),
        }
    }
}

/// Editable payload carried by a node
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub config: HashMap<String, ConfigValue>,

    /// Output of the most recent run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_id: Option<String>,
}

/// One input declared on a Form node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormField {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            field_type: None,
            required: false,
        }
    }
}
