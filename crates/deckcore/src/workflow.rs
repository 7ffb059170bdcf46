use crate::{Node, NodeId};
use serde::{Deserialize, Serialize};

pub type WorkflowId = String;

/// Workflow as loaded by the editor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: WorkflowId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub trigger_type: TriggerType,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub form: Vec<FormEntry>,
}

impl Workflow {
    pub fn new(id: impl Into<WorkflowId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            trigger_type: TriggerType::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
            form: Vec::new(),
        }
    }

    pub fn with_trigger(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = trigger_type;
        self
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id.clone();
        self.nodes.push(node);
        id
    }

    pub fn connect(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) {
        self.edges.push(Edge::new(source, target));
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Published form bound to a Form node, if any
    pub fn form_entry(&self, node_id: &str) -> Option<&FormEntry> {
        self.form.iter().find(|f| f.node_id == node_id)
    }
}

/// Directed link between two nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: None,
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TriggerType {
    #[default]
    Manual,
    Webhook,
    Form,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub id: String,
    pub node_id: NodeId,
}

/// Stored credential a node can be bound to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowCredential {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Insertable variable offered to a text field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariableOption {
    pub label: String,
    /// Substitution token inserted into the field
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}
