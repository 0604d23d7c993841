use tracing::error;

use crate::api::ApiClient;
use crate::loadable::Loadable;
use crate::models::MarketIdeaResponse;

/// AI market-idea generator
#[derive(Debug, Default)]
pub struct MarketCreationPage {
    idea: Loadable<MarketIdeaResponse>,
}

impl MarketCreationPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current idea with a freshly generated one
    pub async fn generate(&mut self, api: &ApiClient) {
        self.idea.load(api.generate_market_idea()).await;

        if let Some(e) = self.idea.error() {
            error!("Failed to generate market idea: {}", e);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.idea.is_loading()
    }

    pub fn idea(&self) -> Option<&MarketIdeaResponse> {
        self.idea.value()
    }
}
