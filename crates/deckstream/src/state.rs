use chrono::{DateTime, Utc};
use deckcore::{NodeId, NodeStatus, WorkflowEvent};
use serde::Serialize;
use std::collections::HashMap;

/// Events received for one workflow and the per-node view derived from them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowState {
    /// Accepted events in arrival order
    pub events: Vec<WorkflowEvent>,
    pub statuses: HashMap<NodeId, NodeStatus>,
    pub outputs: HashMap<NodeId, String>,
    pub last_event_at: Option<DateTime<Utc>>,
}

impl WorkflowState {
    /// Fold one raw socket message into the state
    ///
    /// Malformed JSON, events for other workflows and unknown event types are
    /// dropped and leave the state untouched. Returns whether the message was
    /// applied.
    pub fn handle_message(&mut self, workflow_id: &str, raw: &str) -> bool {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Invalid WS message: {} ({})", raw, e);
                return false;
            }
        };

        if value.get("workflowId").and_then(|v| v.as_str()) != Some(workflow_id) {
            tracing::trace!("Ignoring message for another workflow");
            return false;
        }

        // The log only holds typed events; unknown types are not appended.
        match serde_json::from_value::<WorkflowEvent>(value) {
            Ok(event) => {
                self.apply(event);
                true
            }
            Err(e) => {
                tracing::warn!("Unrecognized workflow event: {} ({})", raw, e);
                false
            }
        }
    }

    /// Append an event and update the derived maps
    pub fn apply(&mut self, event: WorkflowEvent) {
        tracing::debug!("Node {} event: {:?}", event.node_id(), event.status());

        match &event {
            WorkflowEvent::NodeOutput {
                node_id, output, ..
            } => {
                self.outputs.insert(node_id.clone(), output.clone());
            }
            other => {
                if let Some(status) = other.status() {
                    self.statuses.insert(other.node_id().to_string(), status);
                }
            }
        }

        self.events.push(event);
        self.last_event_at = Some(Utc::now());
    }

    pub fn status(&self, node_id: &str) -> Option<NodeStatus> {
        self.statuses.get(node_id).copied()
    }

    pub fn output(&self, node_id: &str) -> Option<&str> {
        self.outputs.get(node_id).map(String::as_str)
    }
}
