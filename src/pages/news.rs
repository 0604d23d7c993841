use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::api::ApiClient;
use crate::loadable::Loadable;
use crate::models::{parse_timestamp, NewsItem};

pub const NEWS_PAGE_LIMIT: u32 = 50;

/// Relative age of a headline, e.g. `3h ago`
///
/// Older than two days falls back to `M/D/YYYY`; unparseable input is
/// returned unchanged.
pub fn age_label(published_at: &str, now: DateTime<Utc>) -> String {
    let Some(published) = parse_timestamp(published_at) else {
        return published_at.to_string();
    };

    let hours = (now - published).num_milliseconds().div_euclid(3_600_000);
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if hours < 48 {
        "Yesterday".to_string()
    } else {
        published.format("%-m/%-d/%Y").to_string()
    }
}

/// Headlines with a free-text search box
#[derive(Debug, Default)]
pub struct NewsPage {
    news: Loadable<Vec<NewsItem>>,
    query: String,
    searching: bool,
}

impl NewsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.news.load(api.get_news(NEWS_PAGE_LIMIT)).await;

        if let Some(e) = self.news.error() {
            error!("Failed to load news: {}", e);
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Search with the current query, replacing the list on success
    ///
    /// A blank query does nothing and returns `false`. A failed search keeps
    /// the current list.
    pub async fn search(&mut self, api: &ApiClient) -> bool {
        if self.query.trim().is_empty() {
            return false;
        }

        self.searching = true;
        match api.search_news(&self.query).await {
            Ok(items) => {
                info!("News search {:?} returned {} items", self.query, items.len());
                self.news = Loadable::Success(items);
            }
            Err(e) => error!("Failed to search news: {}", e),
        }
        self.searching = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.news.is_loading()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn news(&self) -> &[NewsItem] {
        self.news.items()
    }
}
