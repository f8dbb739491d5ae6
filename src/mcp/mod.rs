//! MCP (Model Context Protocol) tool server
//!
//! JSON-RPC `tools/list` and `tools/call` over HTTP or stdio.

pub mod dispatch;
pub mod protocol;
pub mod tools;

pub use dispatch::{Dispatcher, Reply};
pub use protocol::{
    methods, McpError, McpHandler, McpRequest, McpResponse, McpServer, RawResponse,
    ToolDefinition,
};
pub use tools::{ToolName, ToolRegistry, REGISTRY, TOOL_DEFINITIONS};
