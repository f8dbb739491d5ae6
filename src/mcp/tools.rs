//! MCP tool definitions and the registry that dispatches to them

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::protocol::ToolDefinition;
use crate::error::{LabError, Result};
use crate::tools::{calendar, search, ToolArguments};

/// Names of every registered tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GoogleSearch,
    GoogleCalendarList,
}

impl ToolName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GoogleSearch => "google_search",
            ToolName::GoogleCalendarList => "google_calendar_list",
        }
    }

    fn handler(&self) -> ToolFn {
        match self {
            ToolName::GoogleSearch => search::google_search,
            ToolName::GoogleCalendarList => calendar::google_calendar_list,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "google_search" => Ok(ToolName::GoogleSearch),
            "google_calendar_list" => Ok(ToolName::GoogleCalendarList),
            _ => Err(LabError::UnknownTool(s.to_string())),
        }
    }
}

/// Signature every tool implementation has
pub type ToolFn = fn(&ToolArguments) -> Result<Value>;

/// All tool definitions, in registration order
pub const TOOL_DEFINITIONS: &[(ToolName, &str, &str)] = &[
    (
        ToolName::GoogleSearch,
        "Search the web using Google (demo).",
        r#"{
            "type": "object",
            "properties": {
                "query": {"type": "string"}
            },
            "required": ["query"]
        }"#,
    ),
    (
        ToolName::GoogleCalendarList,
        "List events from a Google Calendar (demo).",
        r#"{
            "type": "object",
            "properties": {
                "calendar_id": {"type": "string"}
            },
            "required": ["calendar_id"]
        }"#,
    ),
];

/// Process-wide registry, built on first use and read-only afterwards
pub static REGISTRY: Lazy<ToolRegistry> = Lazy::new(ToolRegistry::builtin);

/// Static table of tool descriptors; handlers are resolved through [`ToolName`]
pub struct ToolRegistry {
    definitions: Vec<ToolDefinition>,
}

impl ToolRegistry {
    fn builtin() -> Self {
        let definitions = TOOL_DEFINITIONS
            .iter()
            .map(|(name, description, schema)| ToolDefinition {
                name: name.to_string(),
                description: description.to_string(),
                input_schema: serde_json::from_str(schema)
                    .expect("built-in tool schema is valid JSON"),
            })
            .collect();

        Self { definitions }
    }

    /// Registered descriptors in registration order
    pub fn list(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Resolve `name` and run the tool against `args`
    pub fn invoke(&self, name: &str, args: &ToolArguments) -> Result<Value> {
        let tool = ToolName::from_str(name)?;

        tracing::debug!(tool = %tool, "Invoking tool");
        (tool.handler())(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registration_order() {
        let names: Vec<&str> = REGISTRY.list().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["google_search", "google_calendar_list"]);
        assert_eq!(REGISTRY.len(), TOOL_DEFINITIONS.len());
    }

    #[test]
    fn test_schemas_parse() {
        for definition in REGISTRY.list() {
            assert_eq!(definition.input_schema["type"], "object");
            assert!(definition.input_schema["required"].is_array());
        }
    }

    #[test]
    fn test_every_definition_is_callable() {
        for (name, _, _) in TOOL_DEFINITIONS {
            let result = REGISTRY
                .invoke(name.as_str(), &ToolArguments::new())
                .unwrap();
            assert_eq!(result["tool"], name.as_str());
        }
    }

    #[test]
    fn test_name_round_trip() {
        for (name, _, _) in TOOL_DEFINITIONS {
            assert_eq!(name.as_str().parse::<ToolName>().unwrap(), *name);
        }
    }

    #[test]
    fn test_unknown_tool() {
        let err = REGISTRY
            .invoke("google_maps", &ToolArguments::new())
            .unwrap_err();
        assert!(matches!(err, LabError::UnknownTool(ref n) if n == "google_maps"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Google_Search".parse::<ToolName>().is_err());
    }

    #[test]
    fn test_invoke_uses_defaults() {
        let result = REGISTRY
            .invoke("google_calendar_list", &ToolArguments::new())
            .unwrap();
        assert_eq!(result["calendarId"], "primary");
    }
}
