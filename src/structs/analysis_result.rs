use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::issue_type::IssueType;

/// Parsed model output, passed through untouched.
///
/// The model is asked for `summary`, `type`, `priority_score`,
/// `suggested_labels` and `potential_impact`, but nothing beyond JSON
/// syntax is enforced. The accessors return `None` for missing or
/// mistyped fields instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub fn from_model_output(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self)
    }

    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn summary(&self) -> Option<&str> {
        self.str_field("summary")
    }

    pub fn issue_type(&self) -> Option<IssueType> {
        self.str_field("type").and_then(IssueType::parse)
    }

    pub fn priority_score(&self) -> Option<&str> {
        self.str_field("priority_score")
    }

    pub fn suggested_labels(&self) -> Vec<&str> {
        self.0
            .get("suggested_labels")
            .and_then(Value::as_array)
            .map(|labels| labels.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn potential_impact(&self) -> Option<&str> {
        self.str_field("potential_impact")
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}
