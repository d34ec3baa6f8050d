use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::info;

use crate::models::PricePoint;

pub const HOUR_MS: i64 = 60 * 60 * 1000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Lookback window `[start_ms, end_ms)` in epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl FetchWindow {
    /// The `days` days leading up to `now`
    pub fn ending_at(now: DateTime<Utc>, days: u32) -> Self {
        let end_ms = now.timestamp_millis();
        Self {
            start_ms: end_ms - i64::from(days) * DAY_MS,
            end_ms,
        }
    }

    pub fn hours(&self) -> i64 {
        (self.end_ms - self.start_ms) / HOUR_MS
    }

    /// Log the range being fetched
    pub fn log_range(&self, symbol: &str) {
        info!(
            "Fetching {} from {} to {}",
            symbol,
            format_ms(self.start_ms),
            format_ms(self.end_ms)
        );
        info!("Total hours needed: {}", self.hours());
    }
}

/// Human-readable UTC time for log lines
pub fn format_ms(ms: i64) -> String {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Log the final count and date range of a fetch
pub fn log_summary(symbol: &str, points: &[PricePoint]) {
    info!("Successfully fetched {} data points for {}", points.len(), symbol);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        let span: Duration = last.timestamp - first.timestamp;
        info!(
            "Date range: {} to {} ({} hours)",
            first.timestamp,
            last.timestamp,
            span.num_hours()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ending_at() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let window = FetchWindow::ending_at(now, 30);

        assert_eq!(window.end_ms, now.timestamp_millis());
        assert_eq!(window.end_ms - window.start_ms, 30 * DAY_MS);
        assert_eq!(window.hours(), 720);
    }

    #[test]
    fn test_zero_days_is_empty() {
        let window = FetchWindow::ending_at(Utc::now(), 0);
        assert_eq!(window.start_ms, window.end_ms);
    }
}
