pub mod ai_provider_error;
pub mod commands;
pub mod issue_type;
pub mod provider_kind;
