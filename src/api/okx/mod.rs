pub mod client;
pub mod models;

pub use client::OkxClient;
pub use models::{parse_okx_row, OkxCandlesResponse};
