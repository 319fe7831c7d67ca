use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    #[serde(default = "ConfigHelper::default_github_api_base_url")]
    pub api_base_url: String,

    /// Environment variable holding an optional token. Unset means anonymous requests.
    #[serde(default = "ConfigHelper::default_github_token_env")]
    pub token_env: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: ConfigHelper::default_github_api_base_url(),
            token_env: ConfigHelper::default_github_token_env(),
        }
    }
}
