//! GraphQL envelope types shared by every request the client sends.

use serde::{Deserialize, Serialize};

/// Request body: `{ "query": ..., "variables": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// Location of an error inside the query document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphQlErrorLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<GraphQlErrorLocation>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Response body: `{ "data": ..., "errors": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// Outcome of a GraphQL call once the envelope is unwrapped
#[derive(Debug, Clone, PartialEq)]
pub enum GraphQlOutcome<T> {
    Data(T),
    Errors(Vec<String>),
    Empty,
}

impl<T> GraphQlResponse<T> {
    /// Errors take precedence over partial data.
    pub fn into_outcome(self) -> GraphQlOutcome<T> {
        if !self.errors.is_empty() {
            return GraphQlOutcome::Errors(
                self.errors.into_iter().map(|e| e.message).collect(),
            );
        }
        match self.data {
            Some(data) => GraphQlOutcome::Data(data),
            None => GraphQlOutcome::Empty,
        }
    }
}
