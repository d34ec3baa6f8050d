//! End-to-end runs behind the two binaries

use std::path::Path;

use chrono::Utc;
use tracing::{error, info, warn};

use super::export_service::{write_prices, write_sentiment};
use super::{
    fetch_binance_history, fetch_okx_history, fetch_sentiment, BinanceFetchConfig, OkxFetchConfig,
};
use crate::api::{BinanceClient, FearGreedClient, OkxClient, SentimentApi};
use crate::config::Settings;
use crate::models::PricePoint;

/// OKX prices for every symbol, then the sentiment index
pub async fn run_okx(settings: &Settings, symbols: &[String], days: u32) {
    let client = OkxClient::new(settings.okx_base_url.clone(), settings.okx_credentials.clone());
    if !client.is_authenticated() {
        warn!("OKX credentials not configured. Using public API (limited historical data)");
    }
    let config = OkxFetchConfig::default();

    info!("Fetching {} days of historical data from OKX for {:?}", days, symbols);
    for symbol in symbols {
        info!("Fetching price data for {}...", symbol);
        let points = fetch_okx_history(&client, symbol, days, Utc::now(), &config).await;
        save_prices(&settings.output_dir, symbol, days, &points);
    }

    let sentiment = FearGreedClient::new(settings.fear_greed_base_url.clone());
    save_sentiment(&settings.output_dir, &sentiment, days).await;

    info!("Historical data fetch completed!");
}

/// Binance prices for every symbol, then the sentiment index
pub async fn run_binance(settings: &Settings, symbols: &[String], days: u32) {
    let client = BinanceClient::new(settings.binance_base_url.clone());
    let config = BinanceFetchConfig::default();

    info!("Fetching {} days of historical data from Binance for {:?}", days, symbols);
    for symbol in symbols {
        info!("Fetching price data for {}...", symbol);
        let points = fetch_binance_history(&client, symbol, days, Utc::now(), &config).await;
        save_prices(&settings.output_dir, symbol, days, &points);
    }

    let sentiment = FearGreedClient::new(settings.fear_greed_base_url.clone());
    save_sentiment(&settings.output_dir, &sentiment, days).await;

    info!("Binance historical data fetch completed!");
}

/// Write one symbol's file; an empty series or a failed write only skips this file
pub fn save_prices(dir: &Path, symbol: &str, days: u32, points: &[PricePoint]) -> bool {
    if points.is_empty() {
        warn!("No data fetched for {}", symbol);
        return false;
    }

    match write_prices(dir, symbol, days, points) {
        Ok(path) => {
            info!("Saved {} price points to {}", points.len(), path.display());
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Fetch and write the sentiment file; nothing is written when no readings came back
///
/// `days == 0` skips the request: the index treats `limit=0` as "full history".
pub async fn save_sentiment<A>(dir: &Path, api: &A, days: u32) -> bool
where
    A: SentimentApi + ?Sized,
{
    if days == 0 {
        warn!("Skipping Fear & Greed index for an empty window");
        return false;
    }

    info!("Fetching Fear & Greed index data...");
    let points = fetch_sentiment(api, days).await;
    if points.is_empty() {
        warn!("No Fear & Greed data available");
        return false;
    }

    match write_sentiment(dir, days, &points) {
        Ok(path) => {
            info!("Saved {} Fear & Greed points to {}", points.len(), path.display());
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}
