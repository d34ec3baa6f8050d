use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::OkxCandlesResponse;
use crate::api::error::send_json;
use crate::api::{ApiError, CursorCandleApi};
use crate::config::OkxCredentials;
use crate::models::{Candle, Interval};
use crate::utils::signing::sign_request;

/// Path signed into `OK-ACCESS-SIGN`; the query string is not part of the signature
pub const CANDLES_PATH: &str = "/api/v5/market/candles";

/// OKX market-data client
pub struct OkxClient {
    http_client: HttpClient,
    base_url: String,
    credentials: Option<OkxCredentials>,
}

impl OkxClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.okx.com";

    /// Create a client against `base_url`; without credentials requests are unauthenticated
    pub fn new(base_url: String, credentials: Option<OkxCredentials>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build the signed headers for the candles endpoint
    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        match &self.credentials {
            Some(credentials) => {
                signed_headers(credentials, &Utc::now().timestamp().to_string())
            }
            None => Ok(HeaderMap::new()),
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|e| ApiError::RequestError(format!("Failed to create auth header: {}", e)))
}

/// `OK-ACCESS-*` headers for a GET on [`CANDLES_PATH`] at `timestamp` (unix seconds)
pub fn signed_headers(credentials: &OkxCredentials, timestamp: &str) -> Result<HeaderMap, ApiError> {
    let signature = sign_request(&credentials.api_secret, timestamp, "GET", CANDLES_PATH)
        .map_err(|e| ApiError::RequestError(e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("ok-access-key"),
        header_value(&credentials.api_key)?,
    );
    headers.insert(HeaderName::from_static("ok-access-sign"), header_value(&signature)?);
    headers.insert(HeaderName::from_static("ok-access-timestamp"), header_value(timestamp)?);
    headers.insert(
        HeaderName::from_static("ok-access-passphrase"),
        header_value(&credentials.passphrase)?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[async_trait]
impl CursorCandleApi for OkxClient {
    /// GET /api/v5/market/candles
    ///
    /// `symbol` is the base asset; it is quoted against USDT.
    async fn candles_before(
        &self,
        symbol: &str,
        bar: Interval,
        before_ms: i64,
        limit: usize,
    ) -> Result<Vec<Candle>, ApiError> {
        let url = format!("{}{}", self.base_url, CANDLES_PATH);
        let inst_id = format!("{}-USDT", symbol);
        let headers = self.create_headers()?;

        debug!("GET {} instId={} bar={} before={}", url, inst_id, bar.okx_bar(), before_ms);

        let request = self
            .http_client
            .get(&url)
            .headers(headers)
            .query(&[
                ("instId", inst_id),
                ("bar", bar.okx_bar().to_string()),
                ("limit", limit.to_string()),
                ("before", before_ms.to_string()),
            ]);

        send_json::<OkxCandlesResponse>(request).await?.into_candles()
    }
}
