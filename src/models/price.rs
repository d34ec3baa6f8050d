//! Normalized price records

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Candle;

/// One timestamp's close price per symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub prices: BTreeMap<String, f64>,
}

impl PricePoint {
    /// Keep the open time and close price of a candle, drop everything else
    pub fn from_candle(symbol: &str, candle: &Candle) -> Option<Self> {
        let timestamp = candle.open_time()?;
        let mut prices = BTreeMap::new();
        prices.insert(symbol.to_string(), candle.close);
        Some(Self { timestamp, prices })
    }

    pub fn price(&self, symbol: &str) -> Option<f64> {
        self.prices.get(symbol).copied()
    }
}

/// Stable sort, oldest first
pub fn sort_by_timestamp(points: &mut [PricePoint]) {
    points.sort_by_key(|p| p.timestamp);
}

/// Drop later points whose timestamp was already seen
pub fn dedup_by_timestamp(points: Vec<PricePoint>) -> Vec<PricePoint> {
    let mut seen = HashSet::new();
    points
        .into_iter()
        .filter(|p| seen.insert(p.timestamp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open_time_ms: i64, close: f64) -> Candle {
        Candle {
            open_time_ms,
            close,
            open: Some(close - 5.0),
            high: Some(close + 10.0),
            low: Some(close - 10.0),
            volume: Some(1234.5),
        }
    }

    #[test]
    fn test_from_candle_keeps_only_close() {
        let point = PricePoint::from_candle("BTC", &candle(1_700_000_000_000, 42_000.5)).unwrap();

        assert_eq!(point.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(point.prices.len(), 1);
        assert_eq!(point.price("BTC"), Some(42_000.5));
    }

    #[test]
    fn test_serializes_second_precision_utc() {
        let point = PricePoint::from_candle("SOL", &candle(1_704_067_200_123, 101.25)).unwrap();
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(json["prices"]["SOL"], 101.25);

        let back: PricePoint = serde_json::from_value(json).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut points = vec![
            PricePoint::from_candle("BTC", &candle(3_600_000, 2.0)).unwrap(),
            PricePoint::from_candle("BTC", &candle(0, 1.0)).unwrap(),
            PricePoint::from_candle("BTC", &candle(3_600_000, 3.0)).unwrap(),
        ];
        sort_by_timestamp(&mut points);
        let points = dedup_by_timestamp(points);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].price("BTC"), Some(1.0));
        assert_eq!(points[1].price("BTC"), Some(2.0));
    }
}
