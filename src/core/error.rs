//! Error types for content fetching and lead submission.

use thiserror::Error;

/// Shown when a failed submission carries no usable `message`.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of a single content request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Failed to fetch {resource}")]
    Http { resource: String, status: u16 },

    /// The body was not JSON or did not match the section's shape.
    #[error("Invalid {resource} response: {reason}")]
    Parse { resource: String, reason: String },

    /// The request was rejected before anything was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Failure of a lead submission after validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx; `message` is the user-facing text to show.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl SubmitError {
    /// Build a rejection from an error response body, preferring its `message` field.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(|m| m.trim().to_string())
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string());
        Self::Rejected { status, message }
    }

    /// Text shown in the form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => SUBMIT_FALLBACK_MESSAGE.to_string(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_names_resource() {
        let err = FetchError::Http {
            resource: "FAQ data".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to fetch FAQ data");
    }

    #[test]
    fn test_rejected_uses_server_message() {
        let err = SubmitError::rejected(400, r#"{"message":"Duplicate lead"}"#);
        assert_eq!(err.user_message(), "Duplicate lead");
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        assert_eq!(
            SubmitError::rejected(500, "<html>oops</html>").user_message(),
            SUBMIT_FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmitError::rejected(422, r#"{"errors":{}}"#).user_message(),
            SUBMIT_FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmitError::rejected(400, r#"{"message":"  "}"#).user_message(),
            SUBMIT_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_network_failure_hides_details() {
        let err = SubmitError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), SUBMIT_FALLBACK_MESSAGE);
    }
}
