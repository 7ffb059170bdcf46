use crate::content::ContentWriterTool;
use crate::math::{MultiplyTool, PowerTool, SumTool};
use crate::tool::{Tool, ToolCall, ToolDefinition, ToolResult};
use deckcore::ToolError;
use serde_json::Value;
use std::sync::Arc;

/// Ordered set of tools offered to the agent
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry holding the built-in tools
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SumTool));
        registry.register(Arc::new(MultiplyTool));
        registry.register(Arc::new(PowerTool));
        registry.register(Arc::new(ContentWriterTool));
        registry
    }

    /// Register a tool, replacing any tool with the same name in place
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        tracing::debug!("Registering tool: {}", tool.name());
        match self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Definitions in registration order, as the agent runtime expects them
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.schema().to_json_schema(),
            })
            .collect()
    }

    /// Validate `input` and run the named tool
    pub async fn invoke(&self, name: &str, input: &Value) -> Result<String, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let validated = tool.schema().validate(input).map_err(|e| {
            tracing::warn!("Rejected call to {}: {}", name, e);
            e
        })?;

        tool.call(&validated)
    }

    /// Run an agent tool call, reporting rejections as error results
    pub async fn invoke_call(&self, call: &ToolCall) -> ToolResult {
        match self.invoke(&call.name, &call.arguments).await {
            Ok(content) => ToolResult {
                tool_call_id: call.id.clone(),
                content,
                is_error: false,
            },
            Err(e) => ToolResult {
                tool_call_id: call.id.clone(),
                content: e.to_string(),
                is_error: true,
            },
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
