use crate::config::constants::{
    DEFAULT_ANALYSIS_SERVER_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, GEMINI_API_BASE_URL,
    GEMINI_DEFAULT_MODEL, GITHUB_API_BASE_URL, GITHUB_TOKEN_ENV, GOOGLE_API_KEY_ENV,
    OPENAI_API_BASE_URL, OPENAI_API_KEY_ENV, OPENAI_DEFAULT_MODEL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_server_url() -> String {
        DEFAULT_ANALYSIS_SERVER_URL.to_string()
    }

    pub fn default_github_api_base_url() -> String {
        GITHUB_API_BASE_URL.to_string()
    }

    pub fn default_github_token_env() -> String {
        GITHUB_TOKEN_ENV.to_string()
    }

    pub fn default_openai_base_url() -> String {
        OPENAI_API_BASE_URL.to_string()
    }

    pub fn default_openai_model() -> String {
        OPENAI_DEFAULT_MODEL.to_string()
    }

    pub fn default_openai_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_gemini_base_url() -> String {
        GEMINI_API_BASE_URL.to_string()
    }

    pub fn default_gemini_model() -> String {
        GEMINI_DEFAULT_MODEL.to_string()
    }

    pub fn default_gemini_api_key_env() -> String {
        GOOGLE_API_KEY_ENV.to_string()
    }
}
