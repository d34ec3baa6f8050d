//! Data models for the fetch pipelines
//!
//! Provider-native candles are parsed into [`Candle`] and immediately normalized into
//! [`PricePoint`]. Sentiment readings land in [`SentimentPoint`]. Both point types are
//! what ends up on disk.

pub mod candle;
pub mod interval;
pub mod price;
pub mod sentiment;
pub mod timestamp;

// Re-export commonly used types for convenience
pub use candle::Candle;
pub use interval::Interval;
pub use price::{dedup_by_timestamp, sort_by_timestamp, PricePoint};
pub use sentiment::SentimentPoint;
