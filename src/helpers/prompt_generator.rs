use crate::config::constants::MAX_PROMPT_COMMENTS;
use crate::constants::prompts::{EMPTY_SECTION, ISSUE_ANALYSIS_INSTRUCTIONS};
use crate::structs::issue::{Issue, IssueComment};

/// Renders the issue into the analysis prompt. Pure and deterministic.
pub fn generate_prompt(title: &str, body: Option<&str>, comments: &[IssueComment]) -> String {
    let body = body.filter(|b| !b.is_empty()).unwrap_or(EMPTY_SECTION);

    let comment_text = comments
        .iter()
        .take(MAX_PROMPT_COMMENTS)
        .map(|comment| format!("- {}", comment.text()))
        .collect::<Vec<_>>()
        .join("\n");
    let comment_text = if comment_text.is_empty() { EMPTY_SECTION } else { comment_text.as_str() };

    format!(
        "\nYou are an AI assistant analyzing a GitHub issue. Here is the data:\n\n\
         Title:\n{}\n\n\
         Body:\n{}\n\n\
         Comments:\n{}\n\n\
         {}",
        title, body, comment_text, ISSUE_ANALYSIS_INSTRUCTIONS
    )
}

pub fn generate_issue_prompt(issue: &Issue) -> String {
    generate_prompt(&issue.title, issue.body.as_deref(), &issue.comments)
}
