use serde_json::json;

use super::client::ApiClient;
use crate::error::ApiResult;
use crate::models::NewsItem;

pub const DEFAULT_NEWS_LIMIT: u32 = 20;

impl ApiClient {
    /// Top headlines
    pub async fn get_news(&self, limit: u32) -> ApiResult<Vec<NewsItem>> {
        self.get(&format!("/news?limit={}", limit)).await
    }

    /// Full-text news search; the query is sent as-is
    pub async fn search_news(&self, query: &str) -> ApiResult<Vec<NewsItem>> {
        self.post("/news/search", &json!({ "query": query })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_news_endpoints() {
        let server = MockServer::start().await;
        let item = json!({
            "id": "news-0",
            "title": "Rates unchanged",
            "description": "The Fed kept rates steady",
            "url": "https://example.com/fed",
            "source": "AP",
            "publishedAt": "2025-03-01T12:00:00Z"
        });

        Mock::given(method("GET"))
            .and(path("/api/news"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([item.clone()])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/news/search"))
            .and(body_json(json!({ "query": "fed rates" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([item])))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        assert_eq!(client.get_news(DEFAULT_NEWS_LIMIT).await.unwrap().len(), 1);

        let found = client.search_news("fed rates").await.unwrap();
        assert_eq!(found[0].source, "AP");
        assert_eq!(found[0].relevance, None);
    }
}
