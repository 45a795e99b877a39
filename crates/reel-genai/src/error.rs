//! Backend error types and failure classification.

use thiserror::Error;

pub type GenAiResult<T> = Result<T, GenAiError>;

/// Message markers that indicate an authorization/entitlement rejection.
///
/// Matching on text is a fallback for backends that only report unstructured
/// messages; HTTP status codes are used first when available.
const AUTHORIZATION_MARKERS: &[&str] = &[
    "401",
    "403",
    "not found",
    "permission",
    "unauthenticated",
    "api key",
];

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Backend returned no payload: {0}")]
    MissingPayload(String),

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Credential error: {0}")]
    Credential(String),
}

impl GenAiError {
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn missing_payload(msg: impl Into<String>) -> Self {
        Self::MissingPayload(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    /// Classify a non-success API response by status code first, message
    /// markers second.
    pub fn from_api(status: u16, body: &str) -> Self {
        let message = format!("backend returned {}: {}", status, body);
        if matches!(status, 401 | 403 | 404) || is_authorization_message(body) {
            Self::Authorization(message)
        } else {
            Self::Generation(message)
        }
    }

    /// Classify an unstructured failure message.
    pub fn classify_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if is_authorization_message(&message) {
            Self::Authorization(message)
        } else {
            Self::Generation(message)
        }
    }

    /// Whether this failure should force credential re-selection.
    pub fn is_authorization(&self) -> bool {
        match self {
            Self::Authorization(_) | Self::Credential(_) => true,
            other => is_authorization_message(&other.to_string()),
        }
    }
}

/// Substring heuristic over an error message.
pub fn is_authorization_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    AUTHORIZATION_MARKERS.iter().any(|m| lower.contains(m))
}
