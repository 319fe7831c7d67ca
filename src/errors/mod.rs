use thiserror::Error;
use warp::http::StatusCode;

/// Crate-wide error type. Every variant maps to one HTTP status.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("GitHub issue not found")]
    IssueNotFound {
        owner: String,
        repo: String,
        number: u64,
    },

    /// Never reaches a caller; the fetcher degrades it to an empty comment list.
    #[error("Comments unavailable for {url}: {reason}")]
    CommentsUnavailable {
        url: String,
        reason: String,
    },

    #[error("{provider} call failed: {reason}")]
    CompletionFailed {
        provider: String,
        reason: String,
    },

    #[error("Malformed repository URL '{url}': {reason}")]
    MalformedRepositoryUrl {
        url: String,
        reason: String,
    },

    #[error("GitHub request failed: {0}")]
    GitHubRequestFailed(String),

    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        field: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Error: {status} - {body}")]
    ServerResponse {
        status: u16,
        body: String,
    },

    #[error("Network error during {operation}: {reason}")]
    Network {
        operation: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyzerError {
    pub fn issue_not_found(owner: &str, repo: &str, number: u64) -> Self {
        Self::IssueNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        }
    }

    pub fn completion_failed(provider: &str, reason: impl ToString) -> Self {
        Self::CompletionFailed {
            provider: provider.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_url(url: &str, reason: &str) -> Self {
        Self::MalformedRepositoryUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_input(field: &str, reason: &str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn network(operation: &str, reason: impl ToString) -> Self {
        Self::Network {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Status code used when this error is returned by the analysis endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::IssueNotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedRepositoryUrl { .. } | Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::GitHubRequestFailed(_) => StatusCode::BAD_GATEWAY,
            Self::ServerResponse { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::CompletionFailed { .. }
            | Self::CommentsUnavailable { .. }
            | Self::Configuration(_)
            | Self::Network { .. }
            | Self::Io(_)
            | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `detail` field of an error reply.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration(error.message().to_string())
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_not_found_has_fixed_detail() {
        let err = AnalyzerError::issue_not_found("octocat", "hello-world", 42);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "GitHub issue not found");
    }

    #[test]
    fn completion_failed_names_provider() {
        let err = AnalyzerError::completion_failed("Gemini", "quota exhausted");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Gemini call failed: quota exhausted");
    }

    #[test]
    fn malformed_url_is_a_client_error() {
        let err = AnalyzerError::malformed_url("nope", "expected owner/repo");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn github_transport_failure_is_bad_gateway() {
        let err = AnalyzerError::GitHubRequestFailed("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.detail(), "GitHub request failed: connection refused");
    }
}
