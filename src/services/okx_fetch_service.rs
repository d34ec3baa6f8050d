//! Backward-paginated history fetch (OKX)
//!
//! The window is cut into fixed-size chunks walked newest to oldest. Inside a chunk, pages
//! are requested with a `before` cursor set to the oldest timestamp seen so far.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::window::{format_ms, log_summary, FetchWindow, HOUR_MS};
use crate::api::CursorCandleApi;
use crate::models::{sort_by_timestamp, Interval, PricePoint};
use crate::utils::pause;

#[derive(Debug, Clone)]
pub struct OkxFetchConfig {
    /// Width of one chunk; also caps the records gathered per chunk
    pub chunk_hours: i64,
    pub page_limit: usize,
    pub bar: Interval,
    pub page_delay: Duration,
    pub chunk_delay: Duration,
}

impl Default for OkxFetchConfig {
    fn default() -> Self {
        Self {
            chunk_hours: 100,
            page_limit: 100,
            bar: Interval::OneDay,
            page_delay: Duration::from_millis(500),
            chunk_delay: Duration::from_secs(2),
        }
    }
}

impl OkxFetchConfig {
    /// A chunk stops requesting pages once it holds one record per hour of its width
    pub fn max_records_per_chunk(&self) -> usize {
        usize::try_from(self.chunk_hours).unwrap_or(0)
    }
}

/// Fetch `days` of close prices for `symbol` ending at `now`, oldest first
///
/// Errors and empty pages end the current chunk only; the walk then moves on to the
/// next older chunk. Nothing is retried.
pub async fn fetch_okx_history<A>(
    api: &A,
    symbol: &str,
    days: u32,
    now: DateTime<Utc>,
    config: &OkxFetchConfig,
) -> Vec<PricePoint>
where
    A: CursorCandleApi + ?Sized,
{
    let window = FetchWindow::ending_at(now, days);
    window.log_range(symbol);

    let chunk_span_ms = config.chunk_hours * HOUR_MS;
    let mut all_points = Vec::new();
    let mut chunk_end = window.end_ms;

    while chunk_end > window.start_ms {
        let chunk_start = window.start_ms.max(chunk_end - chunk_span_ms);
        info!("Fetching chunk: {} to {}", format_ms(chunk_start), format_ms(chunk_end));

        let chunk = fetch_chunk(api, symbol, chunk_start, chunk_end, config).await;
        info!("Fetched {} candles for this chunk", chunk.len());
        all_points.extend(chunk);

        chunk_end = chunk_start;
        if chunk_end > window.start_ms {
            debug!("Pausing {:?} between chunks", config.chunk_delay);
            pause(config.chunk_delay).await;
        }
    }

    sort_by_timestamp(&mut all_points);
    log_summary(symbol, &all_points);
    all_points
}

async fn fetch_chunk<A>(
    api: &A,
    symbol: &str,
    chunk_start: i64,
    chunk_end: i64,
    config: &OkxFetchConfig,
) -> Vec<PricePoint>
where
    A: CursorCandleApi + ?Sized,
{
    let mut chunk = Vec::new();
    let mut cursor = chunk_end;

    while cursor > chunk_start && chunk.len() < config.max_records_per_chunk() {
        let candles = match api
            .candles_before(symbol, config.bar, cursor, config.page_limit)
            .await
        {
            Ok(candles) => candles,
            Err(e) => {
                warn!("OKX request for {} failed: {}", symbol, e);
                break;
            }
        };

        let Some(last) = candles.last() else {
            info!("No more data available from OKX");
            break;
        };

        let mut added = 0;
        for candle in &candles {
            // Records older than the chunk end the page, even if the boundary is mid-page
            if candle.open_time_ms < chunk_start {
                break;
            }
            if let Some(point) = PricePoint::from_candle(symbol, candle) {
                chunk.push(point);
                added += 1;
            }
        }

        if added == 0 {
            break;
        }

        cursor = last.open_time_ms;
        pause(config.page_delay).await;
    }

    chunk
}
