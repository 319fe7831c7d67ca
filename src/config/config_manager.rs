use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_PATH_ENV, CONFIG_RELATIVE_PATH};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    /// `$ISSUE_ANALYZER_CONFIG` when set, otherwise `~/issue-analyzer/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|d| d.join(CONFIG_RELATIVE_PATH)))
    }

    pub fn load() -> AnalyzerResult<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> AnalyzerResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> AnalyzerResult<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| AnalyzerError::Configuration("Could not determine home directory".to_string()))?;
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> AnalyzerResult<()> {
        if path.exists() {
            return Err(AnalyzerError::Configuration(format!(
                "{} already exists; remove it first to regenerate",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("📝 Sample config written to {}", path.display());
        Ok(())
    }
}

const SAMPLE_CONFIG: &str = r#"# Issue Analyzer configuration

[server]
host = "127.0.0.1"
port = 8000

[github]
api_base_url = "https://api.github.com"
# Optional. Anonymous requests are used when this variable is unset.
token_env = "GITHUB_TOKEN"

[ai.openai]
base_url = "https://api.openai.com/v1"
model = "gpt-3.5-turbo"
api_key_env = "OPENAI_API_KEY"

[ai.gemini]
base_url = "https://generativelanguage.googleapis.com/v1beta"
model = "gemini-1.5-pro"
api_key_env = "GOOGLE_API_KEY"

[client]
server_url = "http://localhost:8000"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 9100\n\n[ai.gemini]\nmodel = \"gemini-1.5-flash\"\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.ai.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.ai.openai.model, "gpt-3.5-turbo");
        assert_eq!(config.github.api_base_url, "https://api.github.com");
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        let err = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(err, AnalyzerError::Configuration(_)));
    }

    #[test]
    fn sample_config_round_trips_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ConfigManager::write_sample_config(&path).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config, Config::default());

        assert!(ConfigManager::write_sample_config(&path).is_err());
    }
}
