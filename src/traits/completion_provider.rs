use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A text-generation backend that answers one prompt with raw text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn produce(&self, prompt: &str) -> Result<String, AiProviderError>;
}
