//! Historical market data for offline backtesting
//!
//! Two pipelines share the same shape: fetch candles page by page from a rate-limited
//! exchange API, normalize them into [`models::PricePoint`]s, then sort, deduplicate and
//! write one JSON file per symbol. Both also write the Fear & Greed index alongside.
//!
//! - OKX walks the window backward in 100-hour chunks with a `before` cursor.
//! - Binance walks it forward in pages of up to 1000 candles.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
