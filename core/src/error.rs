//! Error types for the items API client.
//!
//! # Design
//! Transport and server failures are normalized by `ApiClient` into a
//! variant whose `Display` is the single user-facing message; callers never
//! see the raw response or the transport's own error type. The message is
//! picked by [`failure_message`], an ordered fallback over the structured
//! fields the failure exposes.

use thiserror::Error;

/// Message used when neither the server nor the transport said anything.
pub const FALLBACK_MESSAGE: &str = "request failed";

/// Errors returned by the client, the repository, and `ItemClient::parse_*`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection failure or timeout.
    #[error("{message}")]
    Transport { message: String, timed_out: bool },

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A delete came back 2xx but neither 200 nor 204.
    #[error("delete failed: unexpected status {status}")]
    DeleteRejected { status: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } | ApiError::DeleteRejected { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Picks the most specific message available: the server's `message` field,
/// then the transport's own message, then [`FALLBACK_MESSAGE`]. Blank
/// candidates are skipped.
pub fn failure_message(server_message: Option<&str>, transport_message: Option<&str>) -> String {
    [server_message, transport_message]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}

/// Extracts `message` from a JSON error body such as `{"message":"..."}`.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
