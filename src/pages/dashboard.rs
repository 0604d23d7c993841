use std::convert::Infallible;

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::loadable::Loadable;
use crate::models::{Agent, DashboardStats, Trade};

/// Number of trades shown in the "recent trades" panel
pub const RECENT_TRADES_LIMIT: u32 = 10;

/// Everything the dashboard shows, gathered in one pass
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Missing when the stats call failed
    pub stats: Option<DashboardStats>,
    pub recent_trades: Vec<Trade>,
    pub agents: Vec<Agent>,
}

impl DashboardSnapshot {
    pub fn total_markets(&self) -> u64 {
        self.stats.as_ref().map(|s| s.total_markets).unwrap_or(0)
    }

    pub fn active_agents(&self) -> u64 {
        self.stats.as_ref().map(|s| s.active_agents).unwrap_or(0)
    }

    pub fn total_trades(&self) -> u64 {
        self.stats.as_ref().map(|s| s.total_trades).unwrap_or(0)
    }

    pub fn today_pnl(&self) -> f64 {
        self.stats.as_ref().map(|s| s.today_pnl).unwrap_or(0.0)
    }
}

/// Landing page: headline stats, recent trades and agent status
#[derive(Debug, Default)]
pub struct DashboardPage {
    snapshot: Loadable<DashboardSnapshot, Infallible>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch stats, trades and agents concurrently
    ///
    /// A failed call leaves its part at the default value; the other parts
    /// are still filled in.
    pub async fn load(&mut self, api: &ApiClient) {
        info!("Loading dashboard");
        self.snapshot
            .load(async { Ok(fetch_snapshot(api).await) })
            .await;
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading()
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.value()
    }
}

async fn fetch_snapshot(api: &ApiClient) -> DashboardSnapshot {
    let (stats, trades, agents) = tokio::join!(
        api.get_stats(),
        api.get_trades(RECENT_TRADES_LIMIT),
        api.get_agents(),
    );

    let stats = match stats {
        Ok(stats) => Some(stats),
        Err(e) => {
            warn!("Dashboard stats unavailable: {}", e);
            None
        }
    };

    let recent_trades = trades.unwrap_or_else(|e| {
        warn!("Dashboard trades unavailable: {}", e);
        Vec::new()
    });

    let agents = agents.unwrap_or_else(|e| {
        warn!("Dashboard agents unavailable: {}", e);
        Vec::new()
    });

    DashboardSnapshot {
        stats,
        recent_trades,
        agents,
    }
}
