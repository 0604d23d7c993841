use chrono::{SecondsFormat, Utc};
use tracing::error;

use crate::api::ApiClient;
use crate::models::{ChatMessage, ChatRole, LlmChatRequest, LlmMode, SuperforecasterContext};

/// Canned prompts offered on an empty transcript
pub fn suggestions(mode: LlmMode) -> Vec<&'static str> {
    let mut prompts = vec![
        "What are the current market trends?",
        "Analyze the crypto markets for trading opportunities",
    ];
    if mode == LlmMode::Polymarket {
        prompts.push("What types of markets should I trade?");
    }
    prompts
}

/// Conversation with the backend LLM
#[derive(Debug, Default)]
pub struct ChatPage {
    messages: Vec<ChatMessage>,
    pub input: String,
    pub mode: LlmMode,
    /// Only sent in superforecaster mode
    pub context: SuperforecasterContext,
    loading: bool,
    next_id: u64,
}

impl ChatPage {
    pub fn new(mode: LlmMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn use_suggestion(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Request for `message` in the current mode
    pub fn build_request(&self, message: &str) -> LlmChatRequest {
        let context = match self.mode {
            LlmMode::Superforecaster => Some(self.context.clone()),
            LlmMode::General | LlmMode::Polymarket => None,
        };

        LlmChatRequest {
            message: message.to_string(),
            mode: self.mode,
            context,
        }
    }

    /// Send the current input
    ///
    /// Blank input is ignored and returns `false`. The user message is
    /// appended before the request goes out; a failed request adds no reply.
    pub async fn send(&mut self, api: &ApiClient) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }

        let message = std::mem::take(&mut self.input);
        let request = self.build_request(&message);

        let user_message = ChatMessage {
            id: self.next_message_id(),
            role: ChatRole::User,
            content: message,
            mode: self.mode,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.messages.push(user_message);

        self.loading = true;
        match api.chat_llm(&request).await {
            Ok(resp) => {
                let reply = ChatMessage {
                    id: self.next_message_id(),
                    role: ChatRole::Assistant,
                    content: resp.response,
                    mode: resp.mode,
                    timestamp: resp.timestamp,
                };
                self.messages.push(reply);
            }
            Err(e) => error!("Failed to send message: {}", e),
        }
        self.loading = false;
        true
    }

    fn next_message_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn reply(mode: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "response": "Roughly 35%",
            "mode": mode,
            "timestamp": "2025-01-01T00:00:00"
        }))
    }

    #[tokio::test]
    async fn test_superforecaster_attaches_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/llm/chat"))
            .and(body_json(json!({
                "message": "Odds?",
                "mode": "superforecaster",
                "context": {
                    "event_title": "US Election",
                    "market_question": "Will the incumbent win?",
                    "outcome": "Yes"
                }
            })))
            .respond_with(reply("superforecaster"))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri());
        let mut page = ChatPage::new(LlmMode::Superforecaster);
        page.context = SuperforecasterContext {
            event_title: "US Election".to_string(),
            market_question: "Will the incumbent win?".to_string(),
            outcome: "Yes".to_string(),
        };
        page.input = "Odds?".to_string();

        assert!(page.send(&api).await);
        assert!(page.input.is_empty());
        assert!(!page.is_loading());

        let messages = page.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::User);
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[1].content, "Roughly 35%");
        assert_ne!(messages[0].id, messages[1].id);
    }

    #[tokio::test]
    async fn test_other_modes_omit_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/llm/chat"))
            .and(body_json(json!({ "message": "Trends?", "mode": "general" })))
            .respond_with(reply("general"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/llm/chat"))
            .and(body_json(json!({ "message": "Trends?", "mode": "polymarket" })))
            .respond_with(reply("polymarket"))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri());
        let mut page = ChatPage::new(LlmMode::General);
        page.context.event_title = "ignored".to_string();

        page.input = "Trends?".to_string();
        page.send(&api).await;

        page.mode = LlmMode::Polymarket;
        page.input = "Trends?".to_string();
        page.send(&api).await;

        assert_eq!(page.messages().len(), 4);
        assert_eq!(page.messages()[3].mode, LlmMode::Polymarket);
    }

    #[tokio::test]
    async fn test_blank_input_and_failures() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri());
        let mut page = ChatPage::default();

        page.input = "  ".to_string();
        assert!(!page.send(&api).await);
        assert!(page.messages().is_empty());

        page.input = "hello".to_string();
        assert!(page.send(&api).await);
        assert_eq!(page.messages().len(), 1);
        assert!(!page.is_loading());
    }

    #[test]
    fn test_suggestions_per_mode() {
        assert_eq!(suggestions(LlmMode::General).len(), 2);
        assert_eq!(suggestions(LlmMode::Superforecaster).len(), 2);
        assert_eq!(
            suggestions(LlmMode::Polymarket).last(),
            Some(&"What types of markets should I trade?")
        );
    }
}
