pub mod ai_providers;
pub mod analysis_client;
pub mod completion_client;
pub mod github;
pub mod issue_analyzer;
