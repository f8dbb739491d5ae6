//! JSON-RPC envelope handling: parse, validate, route, wrap

use serde_json::{json, Map, Value};

use super::protocol::{
    methods, McpHandler, McpRequest, McpResponse, RawResponse, JSONRPC_VERSION,
};
use super::tools::REGISTRY;
use crate::config::VersionPolicy;
use crate::error::{LabError, Result};
use crate::tools::ToolArguments;

/// A response envelope together with the status a transport should use
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub response: McpResponse,
}

impl Reply {
    fn success(id: Value, result: Value) -> Self {
        Self {
            status: 200,
            response: McpResponse::success(id, result),
        }
    }

    fn failure(id: Value, err: &LabError) -> Self {
        Self {
            status: err.status(),
            response: McpResponse::from_error(id, err),
        }
    }

    pub fn into_raw(self) -> RawResponse {
        RawResponse::json(self.status, &self.response)
    }
}

/// Stateless request handler over the process-wide tool registry
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    version_policy: VersionPolicy,
}

impl Dispatcher {
    pub fn new(version_policy: VersionPolicy) -> Self {
        Self { version_policy }
    }

    /// Handle an already typed request
    pub fn handle_request(&self, request: McpRequest) -> Reply {
        match serde_json::to_value(&request) {
            Ok(envelope) => self.handle_value(envelope),
            Err(e) => Reply::failure(request.id, &LabError::Serialization(e)),
        }
    }

    /// Handle a decoded JSON envelope
    pub fn handle_value(&self, envelope: Value) -> Reply {
        let id = envelope.get("id").cloned().unwrap_or(Value::Null);

        match self.route(&envelope) {
            Ok(result) => Reply::success(id, result),
            Err(err) => {
                if err.is_invocation() {
                    tracing::warn!(code = err.code(), "Tool call failed: {}", err);
                } else {
                    tracing::warn!(
                        code = err.code(),
                        status = err.status(),
                        "Request rejected: {}",
                        err
                    );
                }
                Reply::failure(id, &err)
            }
        }
    }

    /// Handle a raw request body, never failing
    pub fn handle_bytes(&self, body: &[u8]) -> Reply {
        match parse_body(body) {
            Ok(envelope) => self.handle_value(envelope),
            Err(err) => {
                tracing::warn!("Rejecting unparseable body: {}", err);
                Reply::failure(Value::Null, &err)
            }
        }
    }

    fn route(&self, envelope: &Value) -> Result<Value> {
        let envelope = envelope.as_object().ok_or_else(|| {
            LabError::InvalidRequest("request must be a JSON object".to_string())
        })?;

        self.check_version(envelope)?;

        let method = match envelope.get("method") {
            Some(Value::String(method)) => method.as_str(),
            Some(_) => {
                return Err(LabError::InvalidRequest(
                    "'method' must be a string".to_string(),
                ))
            }
            None => return Err(LabError::InvalidRequest("missing 'method'".to_string())),
        };
        let params = envelope.get("params").unwrap_or(&Value::Null);

        tracing::debug!(method, "Dispatching request");

        match method {
            methods::LIST_TOOLS => Ok(json!({ "tools": REGISTRY.list() })),
            methods::CALL_TOOL => call_tool(params),
            other => Err(LabError::MethodNotFound(other.to_string())),
        }
    }

    fn check_version(&self, envelope: &Map<String, Value>) -> Result<()> {
        match (envelope.get("jsonrpc"), self.version_policy) {
            (Some(Value::String(v)), _) if v == JSONRPC_VERSION => Ok(()),
            (None, VersionPolicy::IfPresent) => Ok(()),
            (None, VersionPolicy::Required) => Err(LabError::InvalidRequest(
                "missing 'jsonrpc' version".to_string(),
            )),
            (Some(other), _) => Err(LabError::InvalidRequest(format!(
                "unsupported jsonrpc version {}, expected \"{}\"",
                other, JSONRPC_VERSION
            ))),
        }
    }
}

impl McpHandler for Dispatcher {
    fn handle_raw(&self, body: &[u8]) -> RawResponse {
        self.handle_bytes(body).into_raw()
    }
}

fn parse_body(body: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(body).map_err(|e| LabError::Parse(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(json!({}));
    }
    serde_json::from_str(text).map_err(|e| LabError::Parse(e.to_string()))
}

fn call_tool(params: &Value) -> Result<Value> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| LabError::MissingArgument("name".to_string()))?;

    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => ToolArguments::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => {
            return Err(LabError::InvalidArgument {
                name: "arguments".to_string(),
                reason: "expected an object".to_string(),
            })
        }
    };

    REGISTRY.invoke(name, &arguments)
}
