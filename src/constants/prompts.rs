/// Placeholder for an empty body or an empty comment list.
pub const EMPTY_SECTION: &str = "(none)";

pub const ISSUE_ANALYSIS_INSTRUCTIONS: &str = r#"Please output JSON **exactly** in the following format:

{
  "summary": "...",
  "type": "bug | feature_request | documentation | question | other",
  "priority_score": "1-5, with justification",
  "suggested_labels": ["...", "..."],
  "potential_impact": "..."
}
"#;
