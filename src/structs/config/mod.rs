pub mod ai_config;
pub mod client_config;
pub mod config;
pub mod credentials;
pub mod github_config;
pub mod server_config;
