use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// A yes/no prediction market as served by the dashboard backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Unique market identifier
    pub id: String,

    /// Market question (e.g., "Will BTC close above $100k in 2025?")
    pub question: String,

    /// Short description, truncated by the backend
    #[serde(default)]
    pub description: String,

    /// Current price of the Yes outcome (0.0 - 1.0)
    pub yes_price: f64,

    /// Current price of the No outcome (0.0 - 1.0)
    pub no_price: f64,

    /// Traded volume in USD
    #[serde(default)]
    pub volume: f64,

    /// Liquidity in USD
    #[serde(default)]
    pub liquidity: f64,

    /// Resolution date as sent by the backend, may be empty
    #[serde(default)]
    pub end_date: String,

    #[serde(default)]
    pub slug: String,

    /// Label of the first outcome
    #[serde(default)]
    pub outcome: String,
}

impl Market {
    /// Parsed end date, if the backend sent a usable one
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.end_date)
    }

    /// Whether the market is still open at `now`
    ///
    /// Markets without a parseable end date count as closed.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.end_time().map(|end| end > now).unwrap_or(false)
    }
}

/// Optional paging for `POST /markets`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MarketQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl MarketQuery {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }
}

/// Aggregate numbers shown on the dashboard header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_markets: u64,
    pub active_agents: u64,
    pub total_trades: u64,
    pub total_value: f64,
    pub today_pnl: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn market_ending(end_date: &str) -> Market {
        Market {
            id: "1".to_string(),
            question: "Q?".to_string(),
            description: String::new(),
            yes_price: 0.4,
            no_price: 0.6,
            volume: 0.0,
            liquidity: 0.0,
            end_date: end_date.to_string(),
            slug: String::new(),
            outcome: String::new(),
        }
    }

    #[test]
    fn test_deserialize_backend_market() {
        let json = r#"{
            "id": "512",
            "question": "Will it rain?",
            "description": "Weather market",
            "yesPrice": 0.62,
            "noPrice": 0.38,
            "volume": 12000.5,
            "liquidity": 800.0,
            "endDate": "2025-12-31T00:00:00Z",
            "slug": "will-it-rain",
            "outcome": "Yes"
        }"#;

        let market: Market = serde_json::from_str(json).unwrap();
        assert_eq!(market.id, "512");
        assert_eq!(market.yes_price, 0.62);
        assert_eq!(market.slug, "will-it-rain");
        assert!(market.end_time().is_some());
    }

    #[test]
    fn test_is_open_at() {
        let now = Utc::now();
        let future = market_ending(&(now + Duration::hours(1)).to_rfc3339());
        let past = market_ending(&(now - Duration::hours(1)).to_rfc3339());
        let exact = market_ending(&now.to_rfc3339());

        assert!(future.is_open_at(now));
        assert!(!past.is_open_at(now));
        assert!(!exact.is_open_at(now));
        assert!(!market_ending("").is_open_at(now));
    }

    #[test]
    fn test_market_query_skips_missing_fields() {
        assert_eq!(serde_json::to_string(&MarketQuery::default()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&MarketQuery::limit(50)).unwrap(),
            r#"{"limit":50}"#
        );
    }
}
