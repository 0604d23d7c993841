use serde::{Deserialize, Serialize};

/// Body of `POST /trading/execute-autonomous`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutonomousTraderRequest {
    pub execute_trade: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TradeRecommendation {
    /// Free-text trade proposal produced by the agent
    pub trade: String,
}

/// Pipeline report from the autonomous trader
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AutonomousTraderResponse {
    pub success: bool,
    pub steps_completed: Vec<String>,
    pub events_found: u32,
    pub events_filtered: u32,
    pub markets_found: u32,
    pub markets_filtered: u32,
    pub trade_recommendation: Option<TradeRecommendation>,
    pub trade_executed: bool,
    pub error: Option<String>,
}

/// Market proposal generated from existing markets
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarketIdeaResponse {
    pub success: bool,
    pub market_description: String,
    pub analysis: String,
    pub timestamp: String,
    pub error: Option<String>,
}
