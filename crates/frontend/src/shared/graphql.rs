//! Minimal GraphQL-over-HTTP client.

use crate::shared::error::ApiError;
use crate::system::auth::storage::get_access_token;
use contracts::shared::graphql::{GraphQlOutcome, GraphQlRequest, GraphQlResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// POST `query` with `variables` to `url` and return the decoded `data`.
pub async fn graphql_request<V, T>(url: &str, query: &str, variables: V) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let body = GraphQlRequest { query, variables };

    let mut builder = Request::post(url).header("Accept", "application/json");
    if let Some(token) = get_access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let request = builder
        .json(&body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_response(status, &text)
}

/// Unwrap a GraphQL envelope.
///
/// GraphQL servers commonly answer 400 with an `errors` array, so the body
/// is inspected before the status code is.
pub fn decode_response<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    let ok = (200..300).contains(&status);
    let envelope: GraphQlResponse<T> = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            let messages = serde_json::from_str::<GraphQlResponse<serde_json::Value>>(text)
                .map(|r| r.errors.into_iter().map(|e| e.message).collect::<Vec<_>>())
                .unwrap_or_default();
            if !messages.is_empty() {
                return Err(ApiError::GraphQl(messages));
            }
            if ok {
                return Err(ApiError::Decode(e.to_string()));
            }
            return Err(ApiError::Http { status });
        }
    };

    match envelope.into_outcome() {
        GraphQlOutcome::Errors(messages) => Err(ApiError::GraphQl(messages)),
        GraphQlOutcome::Data(data) if ok => Ok(data),
        GraphQlOutcome::Data(_) | GraphQlOutcome::Empty if !ok => Err(ApiError::Http { status }),
        _ => Err(ApiError::Decode("response has no data".to_string())),
    }
}
