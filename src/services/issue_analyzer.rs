use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::prompt_generator;
use crate::helpers::repository_url::parse_repository_url;
use crate::services::completion_client::CompletionClient;
use crate::services::github::issue_fetcher::IssueFetcher;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::structs::config::credentials::Credentials;

/// Fetch → prompt → complete, for one request at a time. Holds no per-request state.
#[derive(Clone)]
pub struct IssueAnalyzer {
    fetcher: IssueFetcher,
    completion_client: CompletionClient,
}

impl IssueAnalyzer {
    pub fn new(config: &Config, credentials: &Credentials) -> Self {
        Self::with_parts(
            IssueFetcher::new(&config.github, credentials.github_token.clone()),
            CompletionClient::new(&config.ai, credentials),
        )
    }

    pub const fn with_parts(fetcher: IssueFetcher, completion_client: CompletionClient) -> Self {
        Self {
            fetcher,
            completion_client,
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalyzerResult<AnalysisResult> {
        if request.issue_number == 0 {
            return Err(AnalyzerError::invalid_input("issue_number", "must be a positive integer"));
        }

        let repository = parse_repository_url(&request.repo_url)?;
        let provider = request.provider();

        log::info!("🔍 Analyzing {}#{} with {}", repository, request.issue_number, provider);

        let issue = self.fetcher
            .fetch(&repository.owner, &repository.repo, request.issue_number)
            .await?;

        let prompt = prompt_generator::generate_issue_prompt(&issue);

        let result = self.completion_client.complete(&prompt, provider).await?;

        log::info!("✅ Analysis complete for {}#{}", repository, request.issue_number);
        Ok(result)
    }
}
