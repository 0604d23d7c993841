pub mod agents;
pub mod client;
pub mod events;
pub mod llm;
pub mod markets;
pub mod news;
pub mod trading;

pub use client::{ApiClient, API_BASE};
pub use news::DEFAULT_NEWS_LIMIT;
pub use trading::DEFAULT_TRADES_LIMIT;
