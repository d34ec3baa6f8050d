pub mod client;
pub mod models;

pub use client::FearGreedClient;
pub use models::{FearGreedEntry, FearGreedResponse};
