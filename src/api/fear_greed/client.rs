use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::FearGreedResponse;
use crate::api::error::send_json;
use crate::api::{ApiError, SentimentApi};
use crate::models::SentimentPoint;

/// alternative.me Fear & Greed index client
pub struct FearGreedClient {
    http_client: HttpClient,
    base_url: String,
}

impl FearGreedClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.alternative.me";

    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SentimentApi for FearGreedClient {
    /// GET /fng/?limit={days}
    async fn recent_readings(&self, days: u32) -> Result<Vec<SentimentPoint>, ApiError> {
        let url = format!("{}/fng/", self.base_url);
        debug!("GET {} limit={}", url, days);

        let request = self.http_client.get(&url).query(&[("limit", days)]);
        send_json::<FearGreedResponse>(request).await?.into_points()
    }
}
