use std::fs;
use std::path::Path;
use reqwest::Client;
use crate::config::constants::USER_AGENT;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;

const INVALID_INPUT_MESSAGE: &str = "Please enter a valid repository URL and issue number.";

/// Talks to a running analysis server over HTTP.
pub struct AnalysisClient {
    client: Client,
    server_url: String,
}

impl AnalysisClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            client: Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn validate(request: &AnalysisRequest) -> AnalyzerResult<()> {
        if request.repo_url.trim().is_empty() {
            return Err(AnalyzerError::invalid_input("repo_url", INVALID_INPUT_MESSAGE));
        }
        if request.issue_number == 0 {
            return Err(AnalyzerError::invalid_input("issue_number", INVALID_INPUT_MESSAGE));
        }
        Ok(())
    }

    /// Non-success replies come back as `ServerResponse` carrying status and raw body.
    pub async fn submit(&self, request: &AnalysisRequest) -> AnalyzerResult<AnalysisResult> {
        Self::validate(request)?;

        let url = format!("{}/analyze", self.server_url);
        let response = self.client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(request)
            .send()
            .await
            .map_err(|e| AnalyzerError::network("analysis request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::ServerResponse {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| AnalyzerError::network("reading analysis result", e))
    }

    pub fn save_result(result: &AnalysisResult, path: &Path) -> AnalyzerResult<()> {
        let json = serde_json::to_string_pretty(result)?;
        fs::write(path, json + "\n")?;
        log::info!("💾 Saved analysis to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn rejects_blank_url_and_zero_issue() {
        let blank = AnalysisClient::validate(&AnalysisRequest::new("   ", 3, false)).unwrap_err();
        assert!(matches!(blank, AnalyzerError::InvalidInput { ref field, .. } if field == "repo_url"));

        let zero = AnalysisClient::validate(&AnalysisRequest::new("octocat/hello-world", 0, false)).unwrap_err();
        assert!(matches!(zero, AnalyzerError::InvalidInput { ref field, .. } if field == "issue_number"));
    }

    #[tokio::test]
    async fn posts_request_body_and_returns_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .and(body_json(json!({
                "repo_url": "https://github.com/octocat/hello-world",
                "issue_number": 42,
                "use_gemini": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "ok", "type": "question"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = AnalysisClient::new(&format!("{}/", server.uri()));
        let request = AnalysisRequest::new("https://github.com/octocat/hello-world", 42, true);
        let result = client.submit(&request).await.unwrap();

        assert_eq!(result.summary(), Some("ok"));
    }

    #[tokio::test]
    async fn error_status_and_body_are_kept_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail":"GitHub issue not found"}"#))
            .mount(&server)
            .await;

        let client = AnalysisClient::new(&server.uri());
        let err = client.submit(&AnalysisRequest::new("octocat/hello-world", 9, false)).await.unwrap_err();

        assert_eq!(err.to_string(), r#"Error: 404 - {"detail":"GitHub issue not found"}"#);
    }

    #[tokio::test]
    async fn invalid_input_is_not_sent() {
        let server = MockServer::start().await;
        let client = AnalysisClient::new(&server.uri());

        assert!(client.submit(&AnalysisRequest::new("", 1, false)).await.is_err());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[test]
    fn saves_pretty_json() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("analysis.json");
        let result = AnalysisResult::from_value(json!({"summary": "s", "suggested_labels": ["a"]}));

        AnalysisClient::save_result(&result, &file).unwrap();

        let written = fs::read_to_string(&file).unwrap();
        assert!(written.contains("\n  \"summary\": \"s\""));
        let reparsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(&reparsed, result.as_value());
    }
}
