//! `google_calendar_list`: fake calendar listing

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{string_arg, ToolArguments};
use crate::error::Result;

/// Calendar used when the caller names none
pub const DEFAULT_CALENDAR_ID: &str = "primary";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarListing {
    pub tool: String,
    #[serde(rename = "calendarId")]
    pub calendar_id: String,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub summary: String,
    pub start: String,
    pub end: String,
}

impl CalendarListing {
    pub fn for_calendar(calendar_id: &str) -> Self {
        Self {
            tool: "google_calendar_list".to_string(),
            calendar_id: calendar_id.to_string(),
            events: vec![CalendarEvent {
                id: "evt_1".to_string(),
                summary: "Fake Meeting".to_string(),
                start: "2026-02-06T10:00:00Z".to_string(),
                end: "2026-02-06T11:00:00Z".to_string(),
            }],
        }
    }
}

pub fn google_calendar_list(args: &ToolArguments) -> Result<Value> {
    let calendar_id = string_arg(args, "calendar_id", DEFAULT_CALENDAR_ID)?;
    Ok(serde_json::to_value(CalendarListing::for_calendar(
        &calendar_id,
    ))?)
}
