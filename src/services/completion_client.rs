use std::sync::Arc;
use crate::enums::provider_kind::ProviderKind;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::credentials::Credentials;
use crate::traits::completion_provider::CompletionProvider;

/// Dispatches a prompt to the selected provider and parses the reply as JSON.
#[derive(Clone)]
pub struct CompletionClient {
    chat_provider: Arc<dyn CompletionProvider>,
    generative_provider: Arc<dyn CompletionProvider>,
}

impl CompletionClient {
    pub fn new(ai_config: &AiConfig, credentials: &Credentials) -> Self {
        Self::with_providers(
            Arc::new(OpenAIProvider::from_config(&ai_config.openai, credentials.openai_api_key.clone())),
            Arc::new(GeminiProvider::from_config(&ai_config.gemini, credentials.gemini_api_key.clone())),
        )
    }

    pub fn with_providers(
        chat_provider: Arc<dyn CompletionProvider>,
        generative_provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            chat_provider,
            generative_provider,
        }
    }

    fn provider(&self, kind: ProviderKind) -> &dyn CompletionProvider {
        match kind {
            ProviderKind::Chat => self.chat_provider.as_ref(),
            ProviderKind::Generative => self.generative_provider.as_ref(),
        }
    }

    /// Provider failures and non-JSON replies both become `CompletionFailed`.
    pub async fn complete(&self, prompt: &str, kind: ProviderKind) -> AnalyzerResult<AnalysisResult> {
        let provider = self.provider(kind);
        let provider_name = kind.display_name();

        log::info!("🤖 Requesting analysis from {}", provider.name());

        let raw_output = provider.produce(prompt).await.map_err(|e| {
            log::error!("❌ {} provider error: {}", provider_name, e);
            AnalyzerError::completion_failed(provider_name, e)
        })?;

        AnalysisResult::from_model_output(&raw_output).map_err(|e| {
            log::error!("❌ {} returned non-JSON output: {}", provider_name, e);
            log::debug!("Raw {} output: {}", provider_name, raw_output);
            AnalyzerError::completion_failed(provider_name, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::traits::completion_provider::MockCompletionProvider;
    use mockall::predicate::eq;

    fn unused_provider(name: &str) -> Arc<dyn CompletionProvider> {
        let mut provider = MockCompletionProvider::new();
        provider.expect_name().return_const(name.to_string());
        provider.expect_produce().never();
        Arc::new(provider)
    }

    fn replying_provider(name: &str, reply: Result<String, AiProviderError>) -> Arc<dyn CompletionProvider> {
        let mut provider = MockCompletionProvider::new();
        provider.expect_name().return_const(name.to_string());
        provider
            .expect_produce()
            .with(eq("the prompt"))
            .times(1)
            .returning(move |_| reply.clone());
        Arc::new(provider)
    }

    #[tokio::test]
    async fn chat_kind_uses_chat_provider() {
        let client = CompletionClient::with_providers(
            replying_provider("OpenAI", Ok(r#"{"type": "bug"}"#.to_string())),
            unused_provider("Gemini"),
        );

        let result = client.complete("the prompt", ProviderKind::Chat).await.unwrap();
        assert_eq!(result.as_value()["type"], "bug");
    }

    #[tokio::test]
    async fn generative_kind_uses_generative_provider() {
        let client = CompletionClient::with_providers(
            unused_provider("OpenAI"),
            replying_provider("Gemini", Ok(r#"{"type": "question"}"#.to_string())),
        );

        let result = client.complete("the prompt", ProviderKind::Generative).await.unwrap();
        assert_eq!(result.as_value()["type"], "question");
    }

    #[tokio::test]
    async fn provider_error_is_reported_with_provider_name() {
        let client = CompletionClient::with_providers(
            replying_provider("OpenAI", Err(AiProviderError::NetworkError("connection reset".to_string()))),
            unused_provider("Gemini"),
        );

        let err = client.complete("the prompt", ProviderKind::Chat).await.unwrap_err();
        assert_eq!(err.detail(), "OpenAI call failed: Network Error: connection reset");
    }

    #[tokio::test]
    async fn non_json_output_fails_like_a_provider_error() {
        let client = CompletionClient::with_providers(
            unused_provider("OpenAI"),
            replying_provider("Gemini", Ok("```json\n{}\n```".to_string())),
        );

        let err = client.complete("the prompt", ProviderKind::Generative).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::CompletionFailed { ref provider, .. } if provider == "Gemini"));
        assert!(err.detail().starts_with("Gemini call failed: "));
    }
}
