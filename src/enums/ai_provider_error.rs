use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AiProviderError {
    #[error("API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl AiProviderError {
    /// Classifies a non-success provider response by status code.
    pub fn from_status(status: reqwest::StatusCode, error_text: String) -> Self {
        match status.as_u16() {
            400 => Self::ApiError(format!("Bad request: {}", error_text)),
            401 => Self::AuthenticationError(error_text),
            403 => Self::ApiError(format!("Forbidden: {}", error_text)),
            429 => Self::ApiError(format!("Rate limit exceeded: {}", error_text)),
            _ => Self::ApiError(format!("HTTP {}: {}", status, error_text)),
        }
    }
}
