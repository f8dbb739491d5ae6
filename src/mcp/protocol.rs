//! MCP JSON-RPC protocol types and the stdio transport

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LabError, Result};

/// Protocol version every envelope carries
pub const JSONRPC_VERSION: &str = "2.0";

/// Content type of every response body
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// MCP JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl McpRequest {
    /// Create a request envelope for `method`
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// MCP JSON-RPC response
///
/// `id` is always written, as `null` when the request id could not be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

/// MCP error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpError {
    pub code: i64,
    pub message: String,
}

impl McpResponse {
    /// Create a success response
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Value, code: i64, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(McpError { code, message }),
        }
    }

    /// Create error from LabError
    pub fn from_error(id: Value, err: &LabError) -> Self {
        Self::error(id, err.code(), err.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// What a transport hands back to its caller: status, headers and a
/// serialized envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl RawResponse {
    /// Serialize `response` as a JSON body with the given status
    pub fn json(status_code: u16, response: &McpResponse) -> Self {
        let body = match serde_json::to_string(response) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to serialize response envelope: {}", e);
                return Self::internal_error();
            }
        };

        Self {
            status_code,
            headers: json_headers(),
            body,
        }
    }

    fn internal_error() -> Self {
        Self {
            status_code: 500,
            headers: json_headers(),
            body: r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32000,"message":"Internal error"}}"#
                .to_string(),
        }
    }

    /// Decode the body back into an envelope
    pub fn envelope(&self) -> Result<McpResponse> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

fn json_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
    headers
}

/// Trait for handling raw MCP request bodies
pub trait McpHandler: Send + Sync {
    fn handle_raw(&self, body: &[u8]) -> RawResponse;
}

/// MCP Server handling stdio communication
pub struct McpServer<H>
where
    H: McpHandler,
{
    handler: H,
}

impl<H: McpHandler> McpServer<H> {
    /// Create a new MCP server
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Run the server, reading from stdin and writing to stdout
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(BufReader::new(stdin.lock()), stdout.lock())
    }

    /// Answer one request per input line until EOF
    ///
    /// Lines are passed on as raw bytes, so a line that is not UTF-8 gets a
    /// parse error envelope like any other malformed request.
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<()> {
        let mut line = Vec::new();

        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break, // EOF
                Ok(_) => {
                    let trimmed = trim_ascii(&line);
                    if trimmed.is_empty() {
                        continue;
                    }

                    let response = self.handler.handle_raw(trimmed);
                    writeln!(writer, "{}", response.body)?;
                    writer.flush()?;
                }
                Err(e) => {
                    tracing::error!("Error reading stdin: {}", e);
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Standard MCP methods
pub mod methods {
    pub const LIST_TOOLS: &str = "tools/list";
    pub const CALL_TOOL: &str = "tools/call";
}

/// MCP tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}
