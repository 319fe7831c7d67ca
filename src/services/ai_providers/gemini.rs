use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::GEMINI_RESPONSE_MIME_TYPE;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::config::ai_config::GeminiConfig;
use crate::traits::completion_provider::CompletionProvider;

/// Generative-text provider.
#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
}

impl GeminiProvider {
    pub fn from_config(config: &GeminiConfig, api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.unwrap_or_default(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: config.model.clone(),
        }
    }

    fn get_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                response_mime_type: Some(GEMINI_RESPONSE_MIME_TYPE.to_string()),
            }),
        }
    }

    // The key travels in a header so it never shows up in URLs or error text.
    async fn make_request(&self, url: String, request_body: GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        self.client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    /// Joins every text part of the first candidate.
    fn extract_text(json: &serde_json::Value) -> Result<String, AiProviderError> {
        if let Some(error) = json.get("error") {
            let error_message = error.get("message").and_then(|m| m.as_str()).unwrap_or("Unknown error");
            let error_code = error.get("code").and_then(|c| c.as_i64()).unwrap_or(0);
            return Err(AiProviderError::ApiError(format!("Code {}: {}", error_code, error_message)));
        }

        let parts = json
            .get("candidates")
            .and_then(|candidates| candidates.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            return Err(AiProviderError::SerializationError("No text in response".to_string()));
        }

        Ok(text)
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn produce(&self, prompt: &str) -> Result<String, AiProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = Self::get_request(prompt);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API Error Response: {}", error_text);
            return Err(AiProviderError::from_status(status, error_text));
        }

        let json: serde_json::Value = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_text(&json)
    }
}
