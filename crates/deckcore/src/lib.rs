//! Core data model for flowdeck
//!
//! This crate provides the types shared by the config resolver, the event
//! stream adapter and the tool registry. It has no runtime dependencies.

mod error;
pub mod events;
mod node;
mod value;
mod workflow;

pub use error::{ConfigError, DeckError, StreamError, ToolError};
pub use events::{ClientMessage, NodeStatus, WorkflowEvent};
pub use node::{FormField, Node, NodeData, NodeId, NodeKind};
pub use value::ConfigValue;
pub use workflow::{
    Edge, FormEntry, TriggerType, VariableOption, Workflow, WorkflowCredential, WorkflowId,
};

/// Result type for flowdeck operations
pub type Result<T> = std::result::Result<T, DeckError>;
