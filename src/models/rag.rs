use serde::{Deserialize, Serialize};

/// Build a local vector store of current markets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RagCreateRequest {
    pub local_directory: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RagCreateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Semantic query against a previously built vector store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RagQueryRequest {
    pub vector_db_directory: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RagQueryResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<RagResult>,
}

/// A document matched by a semantic search
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RagResult {
    pub content: String,
    /// Free-form document metadata (event id, title, ...)
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Distance or similarity score as reported by the store
    #[serde(default)]
    pub score: Option<f64>,
}
