//! Client-side error type for calls to the backend and its display form.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS ...)
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    /// Server answered with a GraphQL `errors` array
    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("invalid server response: {0}")]
    Decode(String),
}

/// Message shown to the user for the last failed call.
///
/// GraphQL failures surface only the first server message.
pub fn format_error(error: Option<&ApiError>) -> String {
    match error {
        None => String::new(),
        Some(ApiError::GraphQl(messages)) => messages.first().cloned().unwrap_or_default(),
        Some(ApiError::Network(message)) => message.clone(),
        Some(ApiError::Http { status }) => format!("HTTP {}", status),
        Some(ApiError::Decode(detail)) => format!("Invalid server response: {}", detail),
    }
}
