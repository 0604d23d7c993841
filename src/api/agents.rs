use tracing::info;

use super::client::{segment, ApiClient};
use crate::error::ApiResult;
use crate::models::{Agent, AgentActionResponse};

impl ApiClient {
    pub async fn get_agents(&self) -> ApiResult<Vec<Agent>> {
        self.get("/agents").await
    }

    pub async fn get_agent(&self, id: &str) -> ApiResult<Agent> {
        self.get(&format!("/agents/{}", segment(id))).await
    }

    /// Request that the backend start an agent
    pub async fn start_agent(&self, id: &str) -> ApiResult<AgentActionResponse> {
        info!("Starting agent {}", id);
        self.post_empty(&format!("/agents/{}/start", segment(id)))
            .await
    }

    /// Request that the backend stop an agent
    pub async fn stop_agent(&self, id: &str) -> ApiResult<AgentActionResponse> {
        info!("Stopping agent {}", id);
        self.post_empty(&format!("/agents/{}/stop", segment(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgentStatus;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_agent_lifecycle_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/agents/agent-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "agent-1",
                "name": "Momentum",
                "status": "error",
                "strategy": "momentum",
                "positions": 3,
                "totalValue": 1000.0,
                "pnl": -12.5,
                "lastActivity": "2025-01-01T00:00:00"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/agents/agent-1/start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Agent agent-1 started"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/agents/missing/stop"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());

        let agent = client.get_agent("agent-1").await.unwrap();
        assert_eq!(agent.status, AgentStatus::Error);
        assert!(!agent.is_running());

        let started = client.start_agent("agent-1").await.unwrap();
        assert!(started.success);

        let err = client.stop_agent("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
