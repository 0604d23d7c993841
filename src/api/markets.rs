use serde_json::json;
use tracing::debug;

use super::client::{segment, ApiClient};
use crate::error::ApiResult;
use crate::models::{DashboardStats, Market, MarketIdeaResponse, MarketQuery};

impl ApiClient {
    /// Dashboard header numbers
    pub async fn get_stats(&self) -> ApiResult<DashboardStats> {
        self.get("/stats").await
    }

    /// List markets; the backend takes paging in a POST body
    pub async fn get_markets(&self, query: MarketQuery) -> ApiResult<Vec<Market>> {
        let markets: Vec<Market> = self.post("/markets", &query).await?;
        debug!("Fetched {} markets", markets.len());
        Ok(markets)
    }

    pub async fn get_market(&self, id: &str) -> ApiResult<Market> {
        self.get(&format!("/markets/{}", segment(id))).await
    }

    /// Ask the backend LLM to propose a new market
    pub async fn generate_market_idea(&self) -> ApiResult<MarketIdeaResponse> {
        self.post("/markets/generate-idea", &json!({})).await
    }
}
