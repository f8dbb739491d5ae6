//! Error types for MCP Lab

use thiserror::Error;

/// Result type alias for MCP Lab operations
pub type Result<T> = std::result::Result<T, LabError>;

/// Main error type for MCP Lab
#[derive(Error, Debug)]
pub enum LabError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Missing '{0}' in params")]
    MissingArgument(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool invocation failed: {0}")]
    Invocation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LabError {
    /// Get error code for the JSON-RPC error object
    pub fn code(&self) -> i64 {
        match self {
            LabError::Parse(_) => -32700,
            LabError::InvalidRequest(_) => -32600,
            LabError::MethodNotFound(_) => -32601,
            _ => -32000,
        }
    }

    /// Get the HTTP status the transport should answer with
    pub fn status(&self) -> u16 {
        match self {
            LabError::Parse(_) | LabError::InvalidRequest(_) => 400,
            LabError::MethodNotFound(_) => 404,
            _ => 500,
        }
    }

    /// Whether the error was raised while running a tool rather than
    /// while reading the envelope
    pub fn is_invocation(&self) -> bool {
        matches!(
            self,
            LabError::MissingArgument(_)
                | LabError::InvalidArgument { .. }
                | LabError::UnknownTool(_)
                | LabError::Invocation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_statuses() {
        let cases = [
            (LabError::Parse("eof".into()), -32700, 400),
            (LabError::InvalidRequest("bad".into()), -32600, 400),
            (LabError::MethodNotFound("x".into()), -32601, 404),
            (LabError::MissingArgument("name".into()), -32000, 500),
            (LabError::UnknownTool("nope".into()), -32000, 500),
            (LabError::Config("bind".into()), -32000, 500),
        ];

        for (err, code, status) in cases {
            assert_eq!(err.code(), code, "{err}");
            assert_eq!(err.status(), status, "{err}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            LabError::MissingArgument("name".into()).to_string(),
            "Missing 'name' in params"
        );
        assert_eq!(
            LabError::UnknownTool("weather".into()).to_string(),
            "Unknown tool: weather"
        );
        assert_eq!(
            LabError::MethodNotFound("resources/list".into()).to_string(),
            "Method not found: resources/list"
        );
    }

    #[test]
    fn test_is_invocation() {
        assert!(LabError::UnknownTool("x".into()).is_invocation());
        assert!(!LabError::Parse("x".into()).is_invocation());
    }
}
