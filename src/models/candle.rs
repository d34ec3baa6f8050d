//! Provider-native candle record

use chrono::{DateTime, TimeZone, Utc};

/// OHLCV candle as returned by an exchange
///
/// Only lives long enough to be turned into a [`PricePoint`](super::PricePoint).
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Candle open time in epoch milliseconds
    pub open_time_ms: i64,
    pub close: f64,
    /// Informational only; `None` when the provider cell is missing or garbled
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<f64>,
}

impl Candle {
    /// Open time truncated to whole seconds, `None` if outside chrono's range
    pub fn open_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.open_time_ms.div_euclid(1000), 0).single()
    }
}
