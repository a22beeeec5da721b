//! Error types for startup configuration and backend calls, plus the mapping
//! from an HTTP status and body to a [`BackendError`].

use serde::Deserialize;
use thiserror::Error;

use crate::auth::AuthErrorBody;

/// Startup configuration problems. Any of these is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required build-time value was absent or blank.
    #[error("missing required configuration value `{0}`")]
    Missing(&'static str),
    /// The backend URL is not an http(s) URL.
    #[error("backend url `{0}` must start with http:// or https://")]
    InvalidUrl(String),
}

/// Failure of a single backend call.
///
/// Call sites treat every variant the same way (navigate away, alert, or
/// fall back to an empty list); the split only makes logs readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status, with the message pulled from the body.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Response status code.
        status: u16,
        /// Server-provided message, or the raw body.
        message: String,
    },
    /// Request or response body could not be (de)serialized.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// A single-row read matched zero or several rows.
    #[error("row not found")]
    NotFound,
    /// The access token was rejected.
    #[error("not signed in")]
    Unauthenticated,
    /// No client was installed at startup.
    #[error("backend client is not configured")]
    NotConfigured,
}

/// Error body returned by the REST endpoint.
#[derive(Debug, Default, Deserialize)]
struct RestErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

impl BackendError {
    /// Classify a non-success response.
    ///
    /// `single` marks a single-row read, where 404 and 406 mean the row does
    /// not exist. A 401 is always [`BackendError::Unauthenticated`]. Otherwise
    /// the message comes from a REST body (`message`, then `details`), then an
    /// auth body (`error_description`, `msg`, `message`), then the raw text.
    pub fn from_response(status: u16, body: &str, single: bool) -> Self {
        if status == 401 {
            return BackendError::Unauthenticated;
        }
        if single && matches!(status, 404 | 406) {
            return BackendError::NotFound;
        }

        let rest_message = serde_json::from_str::<RestErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.details))
            .filter(|m| !m.trim().is_empty());
        let message = rest_message
            .or_else(|| {
                serde_json::from_str::<AuthErrorBody>(body)
                    .ok()
                    .and_then(AuthErrorBody::into_message)
            })
            .unwrap_or_else(|| body.to_string());

        tracing::debug!(status, %message, "backend call failed");
        BackendError::Http {
            status,
            message,
        }
    }

    /// Text suitable for an alert or banner.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Http {
                message, ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}
