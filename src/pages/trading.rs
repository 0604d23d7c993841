use tracing::{error, info, warn};

use super::format::round_tenth;
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::loadable::Loadable;
use crate::models::{Market, MarketQuery, TradeRequest, TradeResponse, TradeSide};

pub const TRADING_MARKETS_LIMIT: u32 = 100;

/// Result of submitting the order form
#[derive(Debug)]
pub enum TradeOutcome {
    Executed { transaction_id: Option<String> },
    /// Backend answered but refused the trade
    Rejected { error: Option<String> },
    Failed(ApiError),
}

impl TradeOutcome {
    fn from_response(resp: TradeResponse) -> Self {
        if resp.success {
            TradeOutcome::Executed {
                transaction_id: resp.transaction_id,
            }
        } else {
            TradeOutcome::Rejected { error: resp.error }
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, TradeOutcome::Executed { .. })
    }

    /// Message to show the user
    pub fn notice(&self) -> String {
        match self {
            TradeOutcome::Executed { transaction_id } => format!(
                "Trade executed! Transaction ID: {}",
                transaction_id.as_deref().unwrap_or("unknown")
            ),
            TradeOutcome::Rejected { error } => format!(
                "Trade failed: {}",
                error.as_deref().unwrap_or("unknown error")
            ),
            TradeOutcome::Failed(e) => format!("Trade failed: {}", e),
        }
    }
}

/// Market picker plus order form
#[derive(Debug, Default)]
pub struct TradingPage {
    markets: Loadable<Vec<Market>>,
    /// Market id passed in by the caller (the `market` query parameter)
    requested_market: Option<String>,
    selected: Option<Market>,
    side: TradeSide,
    size: Option<f64>,
    price_cents: Option<f64>,
    executing: bool,
}

impl TradingPage {
    pub fn new(requested_market: Option<String>) -> Self {
        Self {
            requested_market,
            ..Self::default()
        }
    }

    /// Load the market list, then select the requested market if present
    pub async fn load(&mut self, api: &ApiClient) {
        self.markets
            .load(api.get_markets(MarketQuery::limit(TRADING_MARKETS_LIMIT)))
            .await;

        if let Some(e) = self.markets.error() {
            error!("Failed to load markets: {}", e);
            return;
        }

        if let Some(id) = self.requested_market.clone() {
            if !self.select_market(&id) {
                warn!("Requested market {} is not in the market list", id);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.markets.is_loading()
    }

    pub fn markets(&self) -> &[Market] {
        self.markets.items()
    }

    /// Select a loaded market and pre-fill the price with its Yes price
    pub fn select_market(&mut self, id: &str) -> bool {
        let Some(market) = self.markets().iter().find(|m| m.id == id).cloned() else {
            return false;
        };

        self.price_cents = Some(round_tenth(market.yes_price * 100.0));
        self.requested_market = Some(market.id.clone());
        self.selected = Some(market);
        true
    }

    pub fn selected(&self) -> Option<&Market> {
        self.selected.as_ref()
    }

    pub fn side(&self) -> TradeSide {
        self.side
    }

    pub fn set_side(&mut self, side: TradeSide) {
        self.side = side;
    }

    pub fn size(&self) -> Option<f64> {
        self.size
    }

    /// Stake in USD; `None` clears the field
    pub fn set_size(&mut self, size: Option<f64>) {
        self.size = size;
    }

    pub fn price_cents(&self) -> Option<f64> {
        self.price_cents
    }

    pub fn set_price_cents(&mut self, price: Option<f64>) {
        self.price_cents = price;
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    pub fn estimated_cost(&self) -> f64 {
        match (&self.selected, self.size) {
            (Some(_), Some(size)) => size * (self.price_cents.unwrap_or(0.0) / 100.0),
            _ => 0.0,
        }
    }

    /// Payout if the chosen side resolves true
    pub fn potential_return(&self) -> f64 {
        match (&self.selected, self.size) {
            (Some(_), Some(size)) => size,
            _ => 0.0,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.build_request().is_some() && !self.executing
    }

    /// Order for the current form, with the price converted from cents
    pub fn build_request(&self) -> Option<TradeRequest> {
        let market = self.selected.as_ref()?;
        let size = self.size?;
        let price_cents = self.price_cents?;

        Some(TradeRequest {
            market_id: market.id.clone(),
            side: self.side,
            size,
            price: Some(price_cents / 100.0),
        })
    }

    /// Submit the order form
    ///
    /// Returns `None` without issuing a request when the form is incomplete.
    /// The size field is cleared after an executed trade.
    pub async fn submit(&mut self, api: &ApiClient) -> Option<TradeOutcome> {
        let request = self.build_request()?;

        self.executing = true;
        let outcome = match api.execute_trade(&request).await {
            Ok(resp) => TradeOutcome::from_response(resp),
            Err(e) => TradeOutcome::Failed(e),
        };
        self.executing = false;

        if outcome.is_executed() {
            info!("{}", outcome.notice());
            self.size = None;
        } else {
            warn!("{}", outcome.notice());
        }

        Some(outcome)
    }
}
