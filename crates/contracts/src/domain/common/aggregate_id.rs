use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its wire form
    fn as_string(&self) -> String;

    /// Build the id from its wire form
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Parse an opaque (cuid-like) server id, rejecting blank input.
pub fn parse_opaque_id(s: &str, kind: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(format!("Empty {}", kind));
    }
    Ok(trimmed.to_string())
}
