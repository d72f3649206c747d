//! Error type for the game API client.
//!
//! # Design
//! From the client's point of view there is one failure: the call did not
//! complete successfully. The variants only carry the underlying cause so it
//! can be displayed. Status codes are not interpreted, and nothing here is
//! retried or logged.

use thiserror::Error;

/// Errors returned by `GameClient` and `GameApiClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `body` is kept verbatim.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response, or its body could not be read.
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON for the requested type.
    #[error("deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_body() {
        let err = ApiError::Status {
            status: 400,
            body: r#"{"error":"Game is over"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"HTTP 400: {"error":"Game is over"}"#);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn decode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::Decode(source);
        assert!(err.to_string().starts_with("deserialization failed"));
        assert_eq!(err.status(), None);
    }
}
