use crate::{NodeId, StreamError, WorkflowId};
use serde::{Deserialize, Serialize};

/// Execution event published by the backend for one node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    #[serde(rename_all = "camelCase")]
    NodeStarted {
        workflow_id: WorkflowId,
        node_id: NodeId,
    },
    #[serde(rename_all = "camelCase")]
    NodeSucceeded {
        workflow_id: WorkflowId,
        node_id: NodeId,
    },
    #[serde(rename_all = "camelCase")]
    NodeFailed {
        workflow_id: WorkflowId,
        node_id: NodeId,
    },
    #[serde(rename_all = "camelCase")]
    NodeOutput {
        workflow_id: WorkflowId,
        node_id: NodeId,
        output: String,
    },
}

impl WorkflowEvent {
    pub fn workflow_id(&self) -> &str {
        match self {
            WorkflowEvent::NodeStarted { workflow_id, .. }
            | WorkflowEvent::NodeSucceeded { workflow_id, .. }
            | WorkflowEvent::NodeFailed { workflow_id, .. }
            | WorkflowEvent::NodeOutput { workflow_id, .. } => workflow_id,
        }
    }

    pub fn node_id(&self) -> &str {
        match self {
            WorkflowEvent::NodeStarted { node_id, .. }
            | WorkflowEvent::NodeSucceeded { node_id, .. }
            | WorkflowEvent::NodeFailed { node_id, .. }
            | WorkflowEvent::NodeOutput { node_id, .. } => node_id,
        }
    }

    /// Status implied by the event, `None` for output events
    pub fn status(&self) -> Option<NodeStatus> {
        match self {
            WorkflowEvent::NodeStarted { .. } => Some(NodeStatus::Running),
            WorkflowEvent::NodeSucceeded { .. } => Some(NodeStatus::Success),
            WorkflowEvent::NodeFailed { .. } => Some(NodeStatus::Failed),
            WorkflowEvent::NodeOutput { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Running,
    Success,
    Failed,
}

/// Message sent by a client to the event socket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    Subscribe { workflow_id: WorkflowId },
    #[serde(rename_all = "camelCase")]
    Unsubscribe { workflow_id: WorkflowId },
}

impl ClientMessage {
    pub fn subscribe(workflow_id: impl Into<WorkflowId>) -> Self {
        ClientMessage::Subscribe {
            workflow_id: workflow_id.into(),
        }
    }

    pub fn unsubscribe(workflow_id: impl Into<WorkflowId>) -> Self {
        ClientMessage::Unsubscribe {
            workflow_id: workflow_id.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, StreamError> {
        serde_json::to_string(self).map_err(|e| StreamError::Encode(e.to_string()))
    }
}
