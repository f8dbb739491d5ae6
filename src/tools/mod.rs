//! Demo tool implementations
//!
//! Each tool reads its own arguments, fills in defaults for anything missing
//! and returns a canned payload.

pub mod calendar;
pub mod search;

use serde_json::{Map, Value};

use crate::error::{LabError, Result};

pub use calendar::{google_calendar_list, CalendarEvent, CalendarListing, DEFAULT_CALENDAR_ID};
pub use search::{google_search, SearchHit, SearchResponse};

/// Arguments of a `tools/call`, keyed by parameter name
pub type ToolArguments = Map<String, Value>;

/// Read a string argument, falling back to `default` when it is absent or null
pub fn string_arg(args: &ToolArguments, name: &str, default: &str) -> Result<String> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(LabError::InvalidArgument {
            name: name.to_string(),
            reason: format!("expected a string, got {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
