//! Forward-paginated history fetch (Binance)

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::window::{format_ms, log_summary, FetchWindow};
use crate::api::RangeCandleApi;
use crate::models::{dedup_by_timestamp, sort_by_timestamp, Interval, PricePoint};
use crate::utils::pause;

#[derive(Debug, Clone)]
pub struct BinanceFetchConfig {
    pub interval: Interval,
    /// Candles per request; also sizes the requested time span
    pub page_limit: usize,
    pub request_delay: Duration,
}

impl Default for BinanceFetchConfig {
    fn default() -> Self {
        Self {
            interval: Interval::OneHour,
            page_limit: 1000,
            request_delay: Duration::from_millis(100),
        }
    }
}

/// Fetch `days` of close prices for `symbol` ending at `now`, oldest first, one point
/// per timestamp
///
/// Any error or empty page ends the walk and keeps what was gathered so far.
pub async fn fetch_binance_history<A>(
    api: &A,
    symbol: &str,
    days: u32,
    now: DateTime<Utc>,
    config: &BinanceFetchConfig,
) -> Vec<PricePoint>
where
    A: RangeCandleApi + ?Sized,
{
    let window = FetchWindow::ending_at(now, days);
    window.log_range(symbol);

    let interval_ms = config.interval.millis();
    let page_span_ms = config.page_limit as i64 * interval_ms;
    let mut points = Vec::new();
    let mut cursor = window.start_ms;

    while cursor < window.end_ms {
        let page_end = window.end_ms.min(cursor + page_span_ms);
        info!("Fetching chunk: {} to {}", format_ms(cursor), format_ms(page_end));

        let candles = match api
            .candles_between(symbol, config.interval, cursor, page_end, config.page_limit)
            .await
        {
            Ok(candles) => candles,
            Err(e) => {
                warn!("Binance request for {} failed: {}", symbol, e);
                break;
            }
        };
        info!("Received {} candles for this chunk", candles.len());

        let Some(last) = candles.last() else {
            info!("No more data available");
            break;
        };

        // Next page starts one interval after the last candle's open time
        let next_cursor = last.open_time_ms + interval_ms;
        points.extend(candles.iter().filter_map(|c| PricePoint::from_candle(symbol, c)));

        if next_cursor <= cursor {
            warn!("Binance cursor for {} did not advance past {}, stopping", symbol, format_ms(cursor));
            break;
        }
        cursor = next_cursor;

        pause(config.request_delay).await;
    }

    sort_by_timestamp(&mut points);
    let points = dedup_by_timestamp(points);
    log_summary(symbol, &points);
    points
}
