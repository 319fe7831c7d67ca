use std::path::Path;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::AnalyzerResult;
use crate::logger::analysis_logger::AnalysisLogger;
use crate::logger::progress_spinner::ProgressSpinner;
use crate::services::analysis_client::AnalysisClient;
use crate::services::issue_analyzer::IssueAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::structs::config::credentials::Credentials;
use crate::ui::analysis_server::AnalysisServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => Self::init_command(),
            Commands::Serve { host, port, open } => Self::serve_command(host, port, open).await,
            Commands::Analyze { repo_url, issue, gemini, server, output } => {
                Self::analyze_command(AnalysisRequest::new(repo_url, issue, gemini), server, output).await
            }
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command() -> AnalyzerResult<()> {
        log::info!("🚀 Initializing issue-analyzer configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("🔑 Set OPENAI_API_KEY and GOOGLE_API_KEY (or a .env file) before serving.");
        Ok(())
    }

    fn load_config() -> AnalyzerResult<Config> {
        ConfigManager::load().map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'issue-analyzer init' to create a configuration file.");
            e
        })
    }

    async fn serve_command(host: Option<String>, port: Option<u16>, open: bool) -> AnalyzerResult<()> {
        let config = Self::load_config()?;
        let credentials = Credentials::from_env(&config);
        credentials.warn_missing(&config);

        let host = host.unwrap_or_else(|| config.server.host.clone());
        let port = port.unwrap_or(config.server.port);

        let mut server = AnalysisServer::new(IssueAnalyzer::new(&config, &credentials));
        let addr = server.start(&host, port).await?;

        if open {
            let url = format!("http://{}", addr);
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}. Visit {} manually.", e, url);
            }
        }

        log::info!("🛑 Press Ctrl+C to stop");
        tokio::signal::ctrl_c().await?;

        server.shutdown().await
    }

    async fn analyze_command(request: AnalysisRequest, server: Option<String>, output: Option<String>) -> AnalyzerResult<()> {
        AnalysisClient::validate(&request)?;

        let server_url = match server {
            Some(url) => url,
            None => Self::load_config()?.client.server_url,
        };
        let client = AnalysisClient::new(&server_url);

        let mut spinner = ProgressSpinner::for_request(&request);
        spinner.start();

        // The caller prints the error itself.
        let result = match client.submit(&request).await {
            Ok(result) => {
                spinner.succeed("Analysis Complete").await;
                result
            }
            Err(e) => {
                spinner.fail("Analysis failed").await;
                return Err(e);
            }
        };

        AnalysisLogger::print_analysis_report(&result);

        if let Some(output) = output {
            AnalysisClient::save_result(&result, Path::new(&output))?;
        }

        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn analyze(server: &MockServer, output: Option<String>) -> Commands {
        Commands::Analyze {
            repo_url: "https://github.com/octocat/hello-world".to_string(),
            issue: 42,
            gemini: false,
            server: Some(server.uri()),
            output,
        }
    }

    #[tokio::test]
    async fn failed_analysis_returns_the_server_reply_unprinted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail":"GitHub issue not found"}"#))
            .mount(&server)
            .await;

        let err = CommandRunner::new().run_command(analyze(&server, None)).await.unwrap_err();

        assert_eq!(err.to_string(), r#"Error: 404 - {"detail":"GitHub issue not found"}"#);
    }

    #[tokio::test]
    async fn successful_analysis_is_saved_to_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "ok", "type": "bug"})))
            .mount(&server)
            .await;
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("issue_analysis.json");

        CommandRunner::new()
            .run_command(analyze(&server, Some(file.display().to_string())))
            .await
            .unwrap();

        let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(saved, json!({"summary": "ok", "type": "bug"}));
    }
}
