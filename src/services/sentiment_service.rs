use tracing::{info, warn};

use crate::api::SentimentApi;
use crate::models::SentimentPoint;

/// Fetch the last `days` index readings, oldest first
///
/// Any failure yields an empty vector: callers treat that as "no sentiment data".
pub async fn fetch_sentiment<A>(api: &A, days: u32) -> Vec<SentimentPoint>
where
    A: SentimentApi + ?Sized,
{
    match api.recent_readings(days).await {
        Ok(mut points) => {
            // The provider lists newest first
            points.reverse();
            info!("Fetched {} Fear & Greed readings", points.len());
            points
        }
        Err(e) => {
            warn!("Error fetching Fear & Greed data: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::services::test_support::MockSentimentApi;
    use chrono::{TimeZone, Utc};

    fn reading(day: u32, value: u8) -> SentimentPoint {
        SentimentPoint {
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            value,
            classification: "Neutral".to_string(),
        }
    }

    #[tokio::test]
    async fn test_output_is_oldest_first() {
        let api = MockSentimentApi::new(Ok(vec![reading(3, 70), reading(2, 50), reading(1, 20)]));

        let points = fetch_sentiment(&api, 3).await;

        assert_eq!(points.len(), 3);
        assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(points[0].value, 20);
    }

    #[tokio::test]
    async fn test_failure_is_empty() {
        let api = MockSentimentApi::new(Err(ApiError::RequestError("dns".to_string())));

        assert!(fetch_sentiment(&api, 30).await.is_empty());
    }
}
