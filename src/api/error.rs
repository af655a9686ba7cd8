//! Error taxonomy for remote calls.
//!
//! Every failure a screen can observe is one of three kinds: the call never
//! completed, the endpoint answered with a logical failure, or a local guard
//! refused to issue the call at all.

use serde::Deserialize;
use thiserror::Error;

/// Message shown when a failure carries no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors surfaced by API calls and local preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not complete (connect, timeout, disconnect, bad body).
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// The endpoint completed the call and reported a failure.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Application {
        status: Option<u16>,
        message: Option<String>,
    },

    /// A local guard failed before any request was issued.
    #[error("{0}")]
    Precondition(String),
}

/// Failure envelope returned by the remote API.
///
/// The backend is not consistent about the field name.
#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        ApiError::Precondition(message.into())
    }

    /// Classify a `reqwest` failure.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::transport("request timed out");
        }
        if err.is_connect() {
            return ApiError::transport(format!("connection failed: {}", err));
        }
        if err.is_decode() {
            return ApiError::transport(format!("unreadable response: {}", err));
        }
        match err.status() {
            Some(status) => ApiError::Application {
                status: Some(status.as_u16()),
                message: None,
            },
            None => ApiError::transport(err.to_string()),
        }
    }

    /// Build an application failure from a non-success status and its body.
    pub fn from_status_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<FailureBody>(body)
            .ok()
            .and_then(|failure| {
                failure
                    .msg
                    .or(failure.message)
                    .or_else(|| match failure.error {
                        Some(serde_json::Value::String(text)) => Some(text),
                        Some(serde_json::Value::Object(map)) => map
                            .get("msg")
                            .or_else(|| map.get("message"))
                            .and_then(|v| v.as_str())
                            .map(str::to_string),
                        _ => None,
                    })
            })
            .filter(|text| !text.trim().is_empty());

        ApiError::Application {
            status: Some(status),
            message,
        }
    }

    /// HTTP status reported by the endpoint, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Application { status, .. } => *status,
            _ => None,
        }
    }

    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Application { .. } => "application",
            ApiError::Precondition(_) => "precondition",
        }
    }

    /// The remote message verbatim, or `fallback` when there is none.
    ///
    /// Transport failures never expose their technical detail to the user.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Application {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Precondition(message) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Message suitable for a list-level error indicator.
    pub fn user_message(&self) -> String {
        self.message_or(GENERIC_FAILURE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msg_field_is_used_verbatim() {
        let err = ApiError::from_status_body(403, br#"{"ok": false, "msg": "not allowed"}"#);
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message_or("fallback"), "not allowed");
        assert_eq!(err.to_string(), "not allowed");
    }

    #[test]
    fn message_field_and_nested_error_are_accepted() {
        let err = ApiError::from_status_body(400, br#"{"message": "bad email"}"#);
        assert_eq!(err.user_message(), "bad email");

        let err = ApiError::from_status_body(400, br#"{"error": {"msg": "nested"}}"#);
        assert_eq!(err.user_message(), "nested");

        let err = ApiError::from_status_body(500, br#"{"error": "plain"}"#);
        assert_eq!(err.user_message(), "plain");
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        let err = ApiError::from_status_body(500, b"<html>oops</html>");
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);

        let err = ApiError::from_status_body(500, br#"{"msg": "   "}"#);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn transport_detail_is_hidden_from_users() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.kind(), "transport");
        assert_eq!(err.message_or("Could not delete"), "Could not delete");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn precondition_message_is_shown() {
        let err = ApiError::precondition("user is not authenticated");
        assert_eq!(err.kind(), "precondition");
        assert_eq!(err.user_message(), "user is not authenticated");
    }
}
