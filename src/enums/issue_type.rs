use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum IssueType {
    #[serde(rename = "bug")]
    Bug,
    #[serde(rename = "feature_request")]
    FeatureRequest,
    #[serde(rename = "documentation")]
    Documentation,
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "other")]
    Other,
}

impl IssueType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "bug" => Some(Self::Bug),
            "feature_request" => Some(Self::FeatureRequest),
            "documentation" => Some(Self::Documentation),
            "question" => Some(Self::Question),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::FeatureRequest => "feature_request",
            Self::Documentation => "documentation",
            Self::Question => "question",
            Self::Other => "other",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Bug => "🐛",
            Self::FeatureRequest => "✨",
            Self::Documentation => "📚",
            Self::Question => "❓",
            Self::Other => "📋",
        }
    }
}
