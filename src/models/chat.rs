use std::fmt;

use serde::{Deserialize, Serialize};

/// Prompting mode of the backend LLM
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LlmMode {
    #[default]
    General,
    /// Answers grounded in current Polymarket data
    Polymarket,
    /// Probability estimate for a single market outcome
    Superforecaster,
}

impl LlmMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmMode::General => "general",
            LlmMode::Polymarket => "polymarket",
            LlmMode::Superforecaster => "superforecaster",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(LlmMode::General),
            "polymarket" => Some(LlmMode::Polymarket),
            "superforecaster" => Some(LlmMode::Superforecaster),
            _ => None,
        }
    }
}

impl fmt::Display for LlmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub mode: LlmMode,
    pub timestamp: String,
}

/// Market the superforecaster is asked about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperforecasterContext {
    pub event_title: String,
    pub market_question: String,
    pub outcome: String,
}

/// Body of `POST /llm/chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LlmChatRequest {
    pub message: String,
    pub mode: LlmMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<SuperforecasterContext>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LlmChatResponse {
    pub response: String,
    pub mode: LlmMode,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_omitted_when_absent() {
        let req = LlmChatRequest {
            message: "hi".to_string(),
            mode: LlmMode::Polymarket,
            context: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "message": "hi", "mode": "polymarket" })
        );
    }
}
