use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// Headline returned by the news endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub published_at: String,
    /// Search relevance (0.0 - 1.0), only set on search results
    #[serde(default)]
    pub relevance: Option<f64>,
}

impl NewsItem {
    pub fn published_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }

    /// Relevance as a whole percentage
    pub fn relevance_percent(&self) -> Option<u32> {
        self.relevance.map(|r| (r * 100.0).round().max(0.0) as u32)
    }
}
