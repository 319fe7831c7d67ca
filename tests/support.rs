use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use issue_analyzer::enums::ai_provider_error::AiProviderError;
use issue_analyzer::services::completion_client::CompletionClient;
use issue_analyzer::services::github::issue_fetcher::IssueFetcher;
use issue_analyzer::services::issue_analyzer::IssueAnalyzer;
use issue_analyzer::structs::config::github_config::GithubConfig;
use issue_analyzer::traits::completion_provider::CompletionProvider;

pub const ANALYSIS_JSON: &str = r#"{"summary": "App crashes on start", "type": "bug", "priority_score": "4", "suggested_labels": ["bug", "crash"], "potential_impact": "Users cannot launch the app"}"#;

/// Provider that replays one canned reply and records every prompt.
pub struct ScriptedProvider {
    name: String,
    reply: Result<String, AiProviderError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn replying(name: &str, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(name: &str, error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            reply: Err(error),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn produce(&self, prompt: &str) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

pub fn analyzer_for(
    github: &MockServer,
    chat: Arc<ScriptedProvider>,
    generative: Arc<ScriptedProvider>,
) -> IssueAnalyzer {
    let config = GithubConfig {
        api_base_url: github.uri(),
        ..GithubConfig::default()
    };
    IssueAnalyzer::with_parts(
        IssueFetcher::new(&config, None),
        CompletionClient::with_providers(chat, generative),
    )
}

/// Mounts `octocat/hello-world#42` with two comments.
pub async fn mount_issue(github: &MockServer) {
    let comments_url = format!("{}/repos/octocat/hello-world/issues/42/comments", github.uri());
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Bug: crash on start",
            "body": "Steps: open the app",
            "comments_url": comments_url,
        })))
        .mount(github)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues/42/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"body": "Same here"},
            {"body": "Happens on 1.2 too"},
        ])))
        .mount(github)
        .await;
}

pub async fn mount_missing_issue(github: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(github)
        .await;
}
