use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Path prefix of every backend endpoint
pub const API_BASE: &str = "/api";

/// Client for the dashboard backend REST API
///
/// Endpoint methods live next to the models they return (see the sibling
/// modules); this file only knows how to issue a JSON request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `origin` (e.g. `http://localhost:8000`)
    pub fn new(origin: &str) -> Self {
        Self::with_client(Client::new(), origin)
    }

    pub fn with_client(client: Client, origin: &str) -> Self {
        Self {
            client,
            base_url: format!("{}{}", origin.trim_end_matches('/'), API_BASE),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::GET, endpoint, None).await
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// POST without a request body
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::POST, endpoint, None).await
    }

    /// Issue a single request and decode the JSON reply
    ///
    /// Any status outside 2xx is an error. No retries, no timeout.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Backend error on {} {}: {} - {}", method, endpoint, status, text);
            return Err(ApiError::from_status(status));
        }

        let parsed = response.json::<T>().await?;
        Ok(parsed)
    }
}

/// Percent-encode a path segment such as a market or agent id
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
