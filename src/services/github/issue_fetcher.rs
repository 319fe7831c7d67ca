use reqwest::{Client, RequestBuilder};
use crate::config::constants::{GITHUB_ACCEPT_HEADER, USER_AGENT};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::github_config::GithubConfig;
use crate::structs::issue::{GithubIssueResponse, Issue, IssueComment};

/// Reads issues and their comments from the GitHub REST API.
#[derive(Clone)]
pub struct IssueFetcher {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl IssueFetcher {
    pub fn new(config: &GithubConfig, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client
            .get(url)
            .header("Accept", GITHUB_ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn fetch(&self, owner: &str, repo: &str, number: u64) -> AnalyzerResult<Issue> {
        let issue_url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, number);
        log::debug!("📥 Fetching {}", issue_url);

        let response = self.get(&issue_url)
            .send()
            .await
            .map_err(|e| AnalyzerError::GitHubRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            log::warn!("⚠️ GitHub returned {} for {}/{}#{}", response.status(), owner, repo, number);
            return Err(AnalyzerError::issue_not_found(owner, repo, number));
        }

        let issue: GithubIssueResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::GitHubRequestFailed(format!("invalid issue payload: {}", e)))?;

        let comments = match issue.comments_url.as_deref() {
            Some(comments_url) => self.fetch_comments(comments_url).await.unwrap_or_else(|e| {
                log::warn!("⚠️ {}; continuing without comments", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(Issue {
            title: issue.title,
            body: issue.body,
            comments,
        })
    }

    /// Every failure here is `CommentsUnavailable`; `fetch` degrades it to no comments.
    pub async fn fetch_comments(&self, comments_url: &str) -> AnalyzerResult<Vec<IssueComment>> {
        let unavailable = |reason: String| AnalyzerError::CommentsUnavailable {
            url: comments_url.to_string(),
            reason,
        };

        let response = self.get(comments_url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("status {}", response.status())));
        }

        response
            .json::<Vec<IssueComment>>()
            .await
            .map_err(|e| unavailable(e.to_string()))
    }
}
