use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::{parse_binance_row, KlineRow};
use crate::api::error::send_json;
use crate::api::{ApiError, RangeCandleApi};
use crate::models::{Candle, Interval};

/// Binance spot market-data client (public endpoints only)
pub struct BinanceClient {
    http_client: HttpClient,
    base_url: String,
}

impl BinanceClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.binance.com";

    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RangeCandleApi for BinanceClient {
    /// GET /api/v3/klines
    ///
    /// `symbol` is the base asset; it is quoted against USDT.
    async fn candles_between(
        &self,
        symbol: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
        limit: usize,
    ) -> Result<Vec<Candle>, ApiError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let pair = format!("{}USDT", symbol);

        debug!("GET {} symbol={} interval={} start={} end={}", url, pair, interval, start_ms, end_ms);

        let request = self.http_client.get(&url).query(&[
            ("symbol", pair),
            ("interval", interval.binance_code().to_string()),
            ("startTime", start_ms.to_string()),
            ("endTime", end_ms.to_string()),
            ("limit", limit.to_string()),
        ]);

        let rows = send_json::<Vec<KlineRow>>(request).await?;
        rows.iter().map(|row| parse_binance_row(row)).collect()
    }
}
