//! MCP Lab - a small JSON-RPC tool dispatcher
//!
//! Exposes a fixed set of demo tools through `tools/list` and `tools/call`,
//! over HTTP or line-delimited stdio.

pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod tools;

pub use config::{ServerConfig, Transport, VersionPolicy};
pub use error::{LabError, Result};
pub use mcp::{Dispatcher, McpHandler, McpRequest, McpResponse, RawResponse, Reply};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
