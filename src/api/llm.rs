use serde_json::json;
use tracing::debug;

use super::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    LlmChatRequest, LlmChatResponse, RagCreateRequest, RagCreateResponse, RagQueryRequest,
    RagQueryResponse, RagResult,
};

impl ApiClient {
    pub async fn chat_llm(&self, request: &LlmChatRequest) -> ApiResult<LlmChatResponse> {
        debug!("Chat request in {} mode", request.mode);
        self.post("/llm/chat", request).await
    }

    /// Build the backend's local vector store of markets
    pub async fn create_rag_database(
        &self,
        request: &RagCreateRequest,
    ) -> ApiResult<RagCreateResponse> {
        self.post("/rag/create", request).await
    }

    pub async fn query_rag_database(
        &self,
        request: &RagQueryRequest,
    ) -> ApiResult<RagQueryResponse> {
        self.post("/rag/query", request).await
    }

    /// Semantic filter over current events
    pub async fn filter_events_rag(&self, query: &str) -> ApiResult<Vec<RagResult>> {
        self.post("/rag/filter-events", &json!({ "query": query }))
            .await
    }
}
