use crate::schema::{ToolSchema, ValidatedInput};
use deckcore::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operation an agent can invoke by name
///
/// `call` only ever sees input that passed [`Tool::schema`] validation.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    /// Tells the agent when to use the tool
    fn description(&self) -> &str;

    fn schema(&self) -> ToolSchema;

    fn call(&self, input: &ValidatedInput) -> Result<String, ToolError>;
}

/// Tool definition sent to the agent runtime
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema describing the tool's parameters.
    pub parameters: Value,
}

/// Tool call requested by the agent
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: Value,
}

/// Tool execution result fed back to the agent
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub content: String,
    pub is_error: bool,
}
