use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AiConfig {
    #[serde(default)]
    pub openai: OpenAIConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OpenAIConfig {
    #[serde(default = "ConfigHelper::default_openai_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_openai_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_openai_api_key_env")]
    pub api_key_env: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_openai_base_url(),
            model: ConfigHelper::default_openai_model(),
            api_key_env: ConfigHelper::default_openai_api_key_env(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    #[serde(default = "ConfigHelper::default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_gemini_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_gemini_api_key_env")]
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_gemini_base_url(),
            model: ConfigHelper::default_gemini_model(),
            api_key_env: ConfigHelper::default_gemini_api_key_env(),
        }
    }
}
