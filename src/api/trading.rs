use serde_json::json;
use tracing::info;

use super::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    AutonomousTraderRequest, AutonomousTraderResponse, Trade, TradeRequest, TradeResponse,
};

/// Trades returned by `get_trades` when no limit is given
pub const DEFAULT_TRADES_LIMIT: u32 = 50;

impl ApiClient {
    pub async fn execute_trade(&self, trade: &TradeRequest) -> ApiResult<TradeResponse> {
        info!(
            "Submitting trade: {} {} x {} @ {:?}",
            trade.market_id, trade.side, trade.size, trade.price
        );
        self.post("/trade", trade).await
    }

    /// Most recent trades, newest last
    pub async fn get_trades(&self, limit: u32) -> ApiResult<Vec<Trade>> {
        self.get(&format!("/trades?limit={}", limit)).await
    }

    /// Run the autonomous pipeline in recommend-only mode
    pub async fn get_trade_recommendation(&self) -> ApiResult<AutonomousTraderResponse> {
        self.post("/trading/recommendation", &json!({})).await
    }

    pub async fn execute_autonomous_trader(
        &self,
        request: AutonomousTraderRequest,
    ) -> ApiResult<AutonomousTraderResponse> {
        info!(
            "Running autonomous trader (execute: {}, dry run: {})",
            request.execute_trade, request.dry_run
        );
        self.post("/trading/execute-autonomous", &request).await
    }
}
