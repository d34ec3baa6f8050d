//! HTTP clients for the candle and sentiment providers
//!
//! The fetch services only talk to the traits defined here, so the pagination loops can
//! be driven by in-memory fakes in tests.

pub mod binance;
pub mod error;
pub mod fear_greed;
pub mod okx;

use async_trait::async_trait;

use crate::models::{Candle, Interval, SentimentPoint};

pub use binance::BinanceClient;
pub use error::ApiError;
pub use fear_greed::FearGreedClient;
pub use okx::OkxClient;

/// Candle API paginated with a `before` timestamp cursor, newest records first
#[async_trait]
pub trait CursorCandleApi {
    async fn candles_before(
        &self,
        symbol: &str,
        bar: Interval,
        before_ms: i64,
        limit: usize,
    ) -> Result<Vec<Candle>, ApiError>;
}

/// Candle API paginated with an explicit `[start, end]` range, oldest records first
#[async_trait]
pub trait RangeCandleApi {
    async fn candles_between(
        &self,
        symbol: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
        limit: usize,
    ) -> Result<Vec<Candle>, ApiError>;
}

/// Sentiment index returning the last `days` readings in provider order (newest first)
#[async_trait]
pub trait SentimentApi {
    async fn recent_readings(&self, days: u32) -> Result<Vec<SentimentPoint>, ApiError>;
}
