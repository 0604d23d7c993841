use tracing::{error, info};

use crate::api::ApiClient;
use crate::loadable::Loadable;
use crate::models::{AutonomousTraderRequest, AutonomousTraderResponse};

/// Autonomous trader control panel
#[derive(Debug)]
pub struct AutonomousTradingPage {
    /// Place the recommended trade instead of only reporting it
    pub execute_trade: bool,
    /// Simulate execution; only meaningful with `execute_trade`
    pub dry_run: bool,
    response: Loadable<AutonomousTraderResponse>,
}

impl Default for AutonomousTradingPage {
    fn default() -> Self {
        Self {
            execute_trade: false,
            dry_run: true,
            response: Loadable::Idle,
        }
    }
}

impl AutonomousTradingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `run` will hit the executing endpoint
    ///
    /// Dry runs go through the recommendation endpoint.
    pub fn will_execute(&self) -> bool {
        self.execute_trade && !self.dry_run
    }

    pub async fn run(&mut self, api: &ApiClient) {
        if self.will_execute() {
            info!("Running autonomous trader with live execution");
            let request = AutonomousTraderRequest {
                execute_trade: true,
                dry_run: false,
            };
            self.response
                .load(api.execute_autonomous_trader(request))
                .await;
        } else {
            self.response.load(api.get_trade_recommendation()).await;
        }

        if let Some(e) = self.response.error() {
            error!("Failed to run autonomous trader: {}", e);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.response.is_loading()
    }

    pub fn response(&self) -> Option<&AutonomousTraderResponse> {
        self.response.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_both(server: &MockServer, recommend_calls: u64, execute_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/api/trading/recommendation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "steps_completed": ["events", "markets", "recommendation"],
                "trade_recommendation": { "trade": "BUY YES 0.41" }
            })))
            .expect(recommend_calls)
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/trading/execute-autonomous"))
            .and(body_json(json!({ "execute_trade": true, "dry_run": false })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "trade_executed": true
            })))
            .expect(execute_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_default_run_only_recommends() {
        let server = MockServer::start().await;
        mount_both(&server, 1, 0).await;

        let api = ApiClient::new(&server.uri());
        let mut page = AutonomousTradingPage::new();
        assert!(!page.will_execute());
        page.run(&api).await;

        let resp = page.response().unwrap();
        assert_eq!(resp.steps_completed.len(), 3);
        assert!(!resp.trade_executed);
    }

    #[tokio::test]
    async fn test_execute_with_dry_run_still_recommends() {
        let server = MockServer::start().await;
        mount_both(&server, 1, 0).await;

        let api = ApiClient::new(&server.uri());
        let mut page = AutonomousTradingPage::new();
        page.execute_trade = true;
        page.run(&api).await;
        assert!(page.response().is_some());
    }

    #[tokio::test]
    async fn test_live_execution() {
        let server = MockServer::start().await;
        mount_both(&server, 0, 1).await;

        let api = ApiClient::new(&server.uri());
        let mut page = AutonomousTradingPage::new();
        page.execute_trade = true;
        page.dry_run = false;
        page.run(&api).await;

        assert!(page.response().unwrap().trade_executed);
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn test_failed_run_clears_previous_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/trading/recommendation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/trading/recommendation"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri());
        let mut page = AutonomousTradingPage::new();
        page.run(&api).await;
        assert!(page.response().is_some());

        page.run(&api).await;
        assert!(page.response().is_none());
        assert!(!page.is_loading());
    }
}
