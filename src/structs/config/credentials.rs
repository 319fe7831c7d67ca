use std::fmt;
use crate::structs::config::config::Config;

/// Provider credentials, read once at startup and never mutated.
#[derive(Clone, Default)]
pub struct Credentials {
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub github_token: Option<String>,
}

impl Credentials {
    pub fn from_env(config: &Config) -> Self {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Resolves every configured variable name through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(config: &Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            openai_api_key: read(&config.ai.openai.api_key_env),
            gemini_api_key: read(&config.ai.gemini.api_key_env),
            github_token: read(&config.github.token_env),
        }
    }

    /// Logs a warning per missing provider key. Startup continues either way.
    pub fn warn_missing(&self, config: &Config) {
        if self.openai_api_key.is_none() {
            log::warn!("⚠️ {} is not set; OpenAI requests will be rejected", config.ai.openai.api_key_env);
        }
        if self.gemini_api_key.is_none() {
            log::warn!("⚠️ {} is not set; Gemini requests will be rejected", config.ai.gemini.api_key_env);
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("openai_api_key", &mask(&self.openai_api_key))
            .field("gemini_api_key", &mask(&self.gemini_api_key))
            .field("github_token", &mask(&self.github_token))
            .finish()
    }
}
