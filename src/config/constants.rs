pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_ANALYSIS_SERVER_URL: &str = "http://localhost:8000";

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const CHAT_TEMPERATURE: f32 = 0.2;

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const GEMINI_RESPONSE_MIME_TYPE: &str = "application/json";

pub const CONFIG_PATH_ENV: &str = "ISSUE_ANALYZER_CONFIG";
pub const CONFIG_RELATIVE_PATH: &str = "issue-analyzer/config.toml";

/// Comments beyond this count are dropped from the prompt.
pub const MAX_PROMPT_COMMENTS: usize = 5;

pub const USER_AGENT: &str = concat!("issue-analyzer/", env!("CARGO_PKG_VERSION"));
