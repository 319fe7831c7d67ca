use serde::{Deserialize, Serialize};
use crate::enums::provider_kind::ProviderKind;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub repo_url: String,
    pub issue_number: u64,
    #[serde(default)]
    pub use_gemini: bool,
}

impl AnalysisRequest {
    pub fn new(repo_url: impl Into<String>, issue_number: u64, use_gemini: bool) -> Self {
        Self {
            repo_url: repo_url.into(),
            issue_number,
            use_gemini,
        }
    }

    pub const fn provider(&self) -> ProviderKind {
        ProviderKind::from_use_gemini(self.use_gemini)
    }
}
