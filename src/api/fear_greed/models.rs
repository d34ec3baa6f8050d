use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::SentimentPoint;

/// Response from `GET /fng/?limit=N`, newest reading first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FearGreedResponse {
    #[serde(default)]
    pub data: Vec<FearGreedEntry>,
    #[serde(default)]
    pub metadata: Option<FearGreedMetadata>,
}

/// One daily reading; every field arrives as a string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FearGreedEntry {
    pub value: String,
    pub value_classification: String,
    /// Unix seconds
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FearGreedMetadata {
    pub error: Option<String>,
}

impl FearGreedEntry {
    pub fn to_point(&self) -> Result<SentimentPoint, ApiError> {
        let value: u8 = self
            .value
            .parse()
            .ok()
            .filter(|v| *v <= 100)
            .ok_or_else(|| {
                ApiError::DeserializationError(format!("Invalid index value: {:?}", self.value))
            })?;

        let timestamp = self
            .timestamp
            .parse::<i64>()
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .ok_or_else(|| {
                ApiError::DeserializationError(format!("Invalid timestamp: {:?}", self.timestamp))
            })?;

        Ok(SentimentPoint {
            timestamp,
            value,
            classification: self.value_classification.clone(),
        })
    }
}

impl FearGreedResponse {
    /// Convert all readings, keeping provider order
    pub fn into_points(self) -> Result<Vec<SentimentPoint>, ApiError> {
        if let Some(error) = self.metadata.and_then(|m| m.error) {
            return Err(ApiError::Provider {
                code: "metadata".to_string(),
                message: error,
            });
        }

        self.data.iter().map(FearGreedEntry::to_point).collect()
    }
}
