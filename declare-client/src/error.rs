use crate::types::ApiErrorPayload;
use thiserror::Error;

/// Result type alias for declare-client operations
pub type Result<T> = std::result::Result<T, DeclareError>;

/// Error types for health declaration API operations
#[derive(Debug, Error)]
pub enum DeclareError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Response parse error: {0}")]
    ResponseParse(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("API request rejected with status {status}")]
    Api {
        status: u16,
        /// Structured error body, when the backend sent one we could parse
        payload: Option<ApiErrorPayload>,
    },
}

impl DeclareError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new API rejection error
    pub fn api(status: u16, payload: Option<ApiErrorPayload>) -> Self {
        Self::Api { status, payload }
    }

    /// Status code of the failed request, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DeclareError::invalid_config("missing base URL");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = DeclareError::api(404, None);
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_status_extraction() {
        assert_eq!(DeclareError::api(500, None).status(), Some(500));
        assert_eq!(DeclareError::invalid_config("x").status(), None);
    }
}
