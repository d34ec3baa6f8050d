//! In-memory provider fakes for the fetch loop tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::api::{ApiError, CursorCandleApi, RangeCandleApi, SentimentApi};
use crate::models::{Candle, Interval, SentimentPoint};

pub type Page<T> = Result<Vec<T>, ApiError>;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// Candle whose OHLV fields differ from `close` so a wrong field shows up in tests
pub fn candle(open_time_ms: i64, close: f64) -> Candle {
    Candle {
        open_time_ms,
        close,
        open: Some(close + 100.0),
        high: Some(close + 200.0),
        low: Some(close - 200.0),
        volume: Some(999.0),
    }
}

/// Scripted pages; once they run out every call returns an empty page
struct Script<T> {
    pages: Mutex<VecDeque<Page<T>>>,
}

impl<T> Script<T> {
    fn new(pages: Vec<Page<T>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
        }
    }

    fn next(&self) -> Page<T> {
        self.pages.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub struct MockCursorApi {
    script: Script<Candle>,
    cursors: Mutex<Vec<i64>>,
}

impl MockCursorApi {
    pub fn new(pages: Vec<Page<Candle>>) -> Self {
        Self {
            script: Script::new(pages),
            cursors: Mutex::new(Vec::new()),
        }
    }

    /// `before` values of every request so far
    pub fn cursors(&self) -> Vec<i64> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl CursorCandleApi for MockCursorApi {
    async fn candles_before(
        &self,
        _symbol: &str,
        _bar: Interval,
        before_ms: i64,
        _limit: usize,
    ) -> Result<Vec<Candle>, ApiError> {
        self.cursors.lock().unwrap().push(before_ms);
        self.script.next()
    }
}

pub struct MockRangeApi {
    script: Script<Candle>,
    ranges: Mutex<Vec<(i64, i64)>>,
}

impl MockRangeApi {
    pub fn new(pages: Vec<Page<Candle>>) -> Self {
        Self {
            script: Script::new(pages),
            ranges: Mutex::new(Vec::new()),
        }
    }

    /// `(start, end)` of every request so far
    pub fn ranges(&self) -> Vec<(i64, i64)> {
        self.ranges.lock().unwrap().clone()
    }
}

#[async_trait]
impl RangeCandleApi for MockRangeApi {
    async fn candles_between(
        &self,
        _symbol: &str,
        _interval: Interval,
        start_ms: i64,
        end_ms: i64,
        _limit: usize,
    ) -> Result<Vec<Candle>, ApiError> {
        self.ranges.lock().unwrap().push((start_ms, end_ms));
        self.script.next()
    }
}

pub struct MockSentimentApi {
    script: Script<SentimentPoint>,
    requested_days: Mutex<Vec<u32>>,
}

impl MockSentimentApi {
    pub fn new(response: Page<SentimentPoint>) -> Self {
        Self {
            script: Script::new(vec![response]),
            requested_days: Mutex::new(Vec::new()),
        }
    }

    /// `days` values of every request so far
    pub fn requested_days(&self) -> Vec<u32> {
        self.requested_days.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentApi for MockSentimentApi {
    async fn recent_readings(&self, days: u32) -> Result<Vec<SentimentPoint>, ApiError> {
        self.requested_days.lock().unwrap().push(days);
        self.script.next()
    }
}
