use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::api::ApiClient;
use crate::loadable::Loadable;
use crate::models::{Market, MarketQuery};

pub const MARKETS_PAGE_LIMIT: u32 = 50;

/// Client-side view filter over the loaded markets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarketFilter {
    #[default]
    All,
    /// End date strictly in the future
    Open,
    /// Everything that is not open
    Closed,
}

impl MarketFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketFilter::All => "all",
            MarketFilter::Open => "open",
            MarketFilter::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(MarketFilter::All),
            "open" => Some(MarketFilter::Open),
            "closed" => Some(MarketFilter::Closed),
            _ => None,
        }
    }

    pub fn matches(&self, market: &Market, now: DateTime<Utc>) -> bool {
        match self {
            MarketFilter::All => true,
            MarketFilter::Open => market.is_open_at(now),
            MarketFilter::Closed => !market.is_open_at(now),
        }
    }
}

impl fmt::Display for MarketFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply `filter` relative to `now`, keeping the input order
pub fn filter_markets(
    markets: &[Market],
    filter: MarketFilter,
    now: DateTime<Utc>,
) -> Vec<&Market> {
    markets.iter().filter(|m| filter.matches(m, now)).collect()
}

/// Market browser with an all/open/closed toggle
#[derive(Debug, Default)]
pub struct MarketsPage {
    markets: Loadable<Vec<Market>>,
    filter: MarketFilter,
}

impl MarketsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.markets
            .load(api.get_markets(MarketQuery::limit(MARKETS_PAGE_LIMIT)))
            .await;

        match &self.markets {
            Loadable::Success(markets) => info!("Loaded {} markets", markets.len()),
            Loadable::Error { error: e, .. } => error!("Failed to load markets: {}", e),
            _ => {}
        }
    }

    pub fn is_loading(&self) -> bool {
        self.markets.is_loading()
    }

    pub fn filter(&self) -> MarketFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: MarketFilter) {
        self.filter = filter;
    }

    pub fn markets(&self) -> &[Market] {
        self.markets.items()
    }

    /// Markets passing the current filter
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Market> {
        filter_markets(self.markets(), self.filter, now)
    }
}
