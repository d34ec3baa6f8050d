pub mod binance_fetch_service;
pub mod export_service;
pub mod okx_fetch_service;
pub mod pipeline_service;
pub mod sentiment_service;
pub mod window;

pub use binance_fetch_service::{fetch_binance_history, BinanceFetchConfig};
pub use export_service::ExportError;
pub use okx_fetch_service::{fetch_okx_history, OkxFetchConfig};
pub use sentiment_service::fetch_sentiment;
pub use window::FetchWindow;

#[cfg(test)]
pub(crate) mod test_support;
