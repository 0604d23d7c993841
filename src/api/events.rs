use super::client::{segment, ApiClient};
use crate::error::ApiResult;
use crate::models::{Event, EventQuery};

impl ApiClient {
    pub async fn get_events(&self, query: EventQuery) -> ApiResult<Vec<Event>> {
        self.get(&format!("/events{}", query.to_query_string())).await
    }

    pub async fn get_event(&self, id: &str) -> ApiResult<Event> {
        self.get(&format!("/events/{}", segment(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventSort;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn event_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "ticker": "ELECTION",
            "slug": "election",
            "title": "Election",
            "description": "Who wins?",
            "endDate": "2026-11-03T00:00:00Z",
            "active": true,
            "closed": false,
            "restricted": false,
            "markets": ["m1", "m2"]
        })
    }

    #[tokio::test]
    async fn test_get_events_with_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .and(query_param("limit", "50"))
            .and(query_param("sort_by", "end_date"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json("e1")])))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let events = client
            .get_events(EventQuery {
                limit: Some(50),
                sort_by: Some(EventSort::EndDate),
            })
            .await
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].markets, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_get_event_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/events/e7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(event_json("e7")))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        assert_eq!(client.get_event("e7").await.unwrap().id, "e7");
    }
}
