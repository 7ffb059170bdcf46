//! Tools exposed to a language-model agent
//!
//! Each tool declares a parameter schema that is validated before its body
//! runs, and is invoked by name through the [`ToolRegistry`].

mod content;
mod math;
mod registry;
mod schema;
mod tool;

pub use content::{generate_content, ContentWriterTool, DEFAULT_LENGTH, DEFAULT_STYLE};
pub use math::{
    calculate_power, calculate_product, calculate_sum, format_number, MultiplyTool, PowerTool,
    SumTool,
};
pub use registry::ToolRegistry;
pub use schema::{ParamSpec, ParamType, ToolSchema, ValidatedInput};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolResult};
