use serde::{Deserialize, Serialize};

/// An issue as the prompt builder sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub comments: Vec<IssueComment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IssueComment {
    #[serde(default)]
    pub body: Option<String>,
}

impl IssueComment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: Some(body.into()) }
    }

    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Subset of the GitHub issue resource that the fetcher reads.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubIssueResponse {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub comments_url: Option<String>,
}
