use serde::{Deserialize, Serialize};

/// Which completion backend handles a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProviderKind {
    /// OpenAI chat completions.
    #[serde(rename = "chat")]
    #[default]
    Chat,
    /// Gemini generateContent.
    #[serde(rename = "generative")]
    Generative,
}

impl ProviderKind {
    pub const fn from_use_gemini(use_gemini: bool) -> Self {
        if use_gemini {
            Self::Generative
        } else {
            Self::Chat
        }
    }

    /// Name used in `"<provider> call failed: ..."` details.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chat => "OpenAI",
            Self::Generative => "Gemini",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
