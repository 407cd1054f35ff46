//! LLM provider definitions

use crate::error::LmChatError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported chat-completions wire protocols
///
/// Deserialization goes through [`FromStr`], so configuration files accept
/// the same case-insensitive names as environment variables and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ProviderKind {
    /// OpenAI-compatible servers (LM Studio, llama.cpp, vLLM, OpenAI itself)
    #[default]
    #[serde(rename = "openai-compatible")]
    OpenAiCompatible,
    /// Azure OpenAI (deployment-based routing, `api-key` header)
    #[serde(rename = "azure")]
    Azure,
}

impl ProviderKind {
    /// Get the provider name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAiCompatible => "openai-compatible",
            ProviderKind::Azure => "azure",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = LmChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "openai-compatible" | "openai_compatible" | "openaicompatible"
            | "lmstudio" | "lm-studio" | "local" => Ok(ProviderKind::OpenAiCompatible),
            "azure" | "azure-openai" | "azure_openai" => Ok(ProviderKind::Azure),
            other => Err(LmChatError::config(format!(
                "Unknown provider '{}' (expected 'openai-compatible' or 'azure')",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ProviderKind {
    type Error = LmChatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
