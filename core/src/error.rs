//! Error types for the listing API client.
//!
//! # Design
//! `ApiError` describes what went wrong with a single HTTP exchange.
//! `RequestFailed` pairs it with the client operation that issued the
//! request; it is the only error kind `ListingClient` reports, and its
//! `Display` output is the string handed to error callbacks.

use serde::Deserialize;

/// Errors produced while executing or interpreting one HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// The `message` field of a JSON error body, if the server sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::HttpError { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A `ListingClient` operation that did not produce a result.
#[derive(Debug, thiserror::Error)]
#[error("{method} failed - {source}")]
pub struct RequestFailed {
    /// Operation name as the front end knows it, e.g. `getAllListings`.
    pub method: &'static str,
    #[source]
    pub source: ApiError,
}

impl RequestFailed {
    pub fn new(method: &'static str, source: ApiError) -> Self {
        Self { method, source }
    }

    pub fn server_message(&self) -> Option<String> {
        self.source.server_message()
    }
}
