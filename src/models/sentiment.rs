//! Market sentiment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Daily Fear & Greed reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    /// 0 (extreme fear) to 100 (extreme greed)
    pub value: u8,
    pub classification: String,
}
