//! Per-page view state
//!
//! Each page owns its state and is driven through `&mut self`: a `load`
//! on mount plus the page's own actions. Load failures are logged and leave
//! the page empty; only trade submission and agent toggles hand an error
//! message back to the caller.

pub mod agents;
pub mod autonomous;
pub mod chat;
pub mod dashboard;
pub mod events;
pub mod format;
pub mod market_creation;
pub mod markets;
pub mod news;
pub mod trading;

pub use agents::AgentsPage;
pub use autonomous::AutonomousTradingPage;
pub use chat::ChatPage;
pub use dashboard::{DashboardPage, DashboardSnapshot};
pub use events::EventsPage;
pub use market_creation::MarketCreationPage;
pub use markets::{MarketFilter, MarketsPage};
pub use news::NewsPage;
pub use trading::{TradeOutcome, TradingPage};
