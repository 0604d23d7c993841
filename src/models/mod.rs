pub mod agent;
pub mod autonomous;
pub mod chat;
pub mod event;
pub mod market;
pub mod news;
pub mod rag;
pub mod trade;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub use agent::{Agent, AgentActionResponse, AgentStatus};
pub use autonomous::{
    AutonomousTraderRequest, AutonomousTraderResponse, MarketIdeaResponse, TradeRecommendation,
};
pub use chat::{
    ChatMessage, ChatRole, LlmChatRequest, LlmChatResponse, LlmMode, SuperforecasterContext,
};
pub use event::{Event, EventQuery, EventSort};
pub use market::{DashboardStats, Market, MarketQuery};
pub use news::NewsItem;
pub use rag::{RagCreateRequest, RagCreateResponse, RagQueryRequest, RagQueryResponse, RagResult};
pub use trade::{Trade, TradeRequest, TradeResponse, TradeSide, TradeStatus};

/// Parse a backend timestamp
///
/// Accepts RFC 3339, a naive ISO datetime (taken as UTC) or a bare
/// `YYYY-MM-DD` date (midnight UTC). Anything else yields `None`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}
