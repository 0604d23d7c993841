use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// Group of related markets sharing a theme and end date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub restricted: bool,
    /// Ids of the markets belonging to this event
    #[serde(default)]
    pub markets: Vec<String>,
}

impl Event {
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.end_date)
    }
}

/// Server-side ordering for `GET /events`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSort {
    #[default]
    NumberOfMarkets,
    EndDate,
}

impl EventSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSort::NumberOfMarkets => "number_of_markets",
            EventSort::EndDate => "end_date",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "number_of_markets" => Some(EventSort::NumberOfMarkets),
            "end_date" => Some(EventSort::EndDate),
            _ => None,
        }
    }
}

impl fmt::Display for EventSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional query parameters for `GET /events`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub limit: Option<u32>,
    pub sort_by: Option<EventSort>,
}

impl EventQuery {
    /// Render as a query string, including the leading `?`, or empty
    ///
    /// A zero limit is treated as absent.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            params.push(format!("limit={}", limit));
        }
        if let Some(sort) = self.sort_by {
            params.push(format!("sort_by={}", sort.as_str()));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}
