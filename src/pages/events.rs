use chrono::{DateTime, Utc};
use tracing::error;

use crate::api::ApiClient;
use crate::loadable::Loadable;
use crate::models::{parse_timestamp, Event, EventQuery, EventSort};

pub const EVENTS_PAGE_LIMIT: u32 = 50;

/// Market ids shown inline on an event card
pub const MARKET_PREVIEW_LEN: usize = 3;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Countdown label for an event end date
pub fn days_left_label(end_date: &str, now: DateTime<Utc>) -> String {
    let Some(end) = parse_timestamp(end_date) else {
        return "No end date".to_string();
    };

    let days_left = ((end - now).num_milliseconds() as f64 / MILLIS_PER_DAY).ceil() as i64;
    match days_left {
        d if d < 0 => "Ended".to_string(),
        0 => "Ends today".to_string(),
        1 => "1 day left".to_string(),
        d => format!("{} days left", d),
    }
}

/// First few market ids of an event plus how many were left out
pub fn market_preview(event: &Event) -> (&[String], usize) {
    let shown = event.markets.len().min(MARKET_PREVIEW_LEN);
    (&event.markets[..shown], event.markets.len() - shown)
}

/// Event list with a server-side sort selector
#[derive(Debug, Default)]
pub struct EventsPage {
    events: Loadable<Vec<Event>>,
    sort: EventSort,
}

impl EventsPage {
    pub fn new(sort: EventSort) -> Self {
        Self {
            events: Loadable::Idle,
            sort,
        }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        let query = EventQuery {
            limit: Some(EVENTS_PAGE_LIMIT),
            sort_by: Some(self.sort),
        };
        self.events.load(api.get_events(query)).await;

        if let Some(e) = self.events.error() {
            error!("Failed to load events: {}", e);
        }
    }

    /// Change the sort key; the list is refetched whenever it changes
    pub async fn set_sort(&mut self, api: &ApiClient, sort: EventSort) {
        if sort == self.sort && !self.events.is_idle() {
            return;
        }
        self.sort = sort;
        self.load(api).await;
    }

    pub fn sort(&self) -> EventSort {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.events.is_loading()
    }

    pub fn events(&self) -> &[Event] {
        self.events.items()
    }
}
