use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown field '{key}' for node type {node_type}")]
    UnknownField { node_type: String, key: String },

    #[error("Field '{0}' is not a text field")]
    NotATextField(String),

    #[error("Unknown credential: {0}")]
    UnknownCredential(String),

    #[error("Node type {node_type} does not support {feature}")]
    NotSupported { node_type: String, feature: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StreamError {
    #[error("Failed to connect to {endpoint}: {reason}")]
    Connect { endpoint: String, reason: String },

    #[error("Connect timeout after {millis}ms")]
    Timeout { millis: u64 },

    #[error("Send failed: {0}")]
    Send(String),

    #[error("Receive failed: {0}")]
    Receive(String),

    #[error("Transport closed")]
    Closed,

    #[error("Failed to encode message: {0}")]
    Encode(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid type for '{field}': expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },
}
