use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome side of a binary market
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    #[default]
    Yes,
    No,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Yes => "yes",
            TradeSide::No => "no",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Some(TradeSide::Yes),
            "no" => Some(TradeSide::No),
            _ => None,
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Pending,
    Filled,
    Cancelled,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Pending => "pending",
            TradeStatus::Filled => "filled",
            TradeStatus::Cancelled => "cancelled",
        }
    }
}

/// A trade recorded by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub market_id: String,
    #[serde(default)]
    pub market_question: String,
    pub side: TradeSide,
    /// Stake in USD
    pub size: f64,
    /// Fill price (0.0 - 1.0)
    pub price: f64,
    pub timestamp: String,
    pub status: TradeStatus,
}

/// Body of `POST /trade`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub market_id: String,
    pub side: TradeSide,
    pub size: f64,
    /// Limit price as a fraction (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub success: bool,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
