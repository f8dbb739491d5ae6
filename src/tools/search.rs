//! `google_search`: fake web search

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{string_arg, ToolArguments};
use crate::error::Result;

const SEARCH_URL: &str = "https://www.google.com/search?q=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tool: String,
    pub query: String,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchResponse {
    pub fn for_query(query: &str) -> Self {
        Self {
            tool: "google_search".to_string(),
            query: query.to_string(),
            results: vec![SearchHit {
                title: "Example result 1".to_string(),
                url: format!("{}{}", SEARCH_URL, urlencoding::encode(query)),
                snippet: format!("Fake search result for '{}'.", query),
            }],
        }
    }
}

/// Missing `query` searches for the empty string
pub fn google_search(args: &ToolArguments) -> Result<Value> {
    let query = string_arg(args, "query", "")?;
    Ok(serde_json::to_value(SearchResponse::for_query(&query))?)
}
