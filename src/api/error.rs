use reqwest::header::RETRY_AFTER;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::utils::errors::summarize_body;

/// Comprehensive error type for provider calls
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Rate Limited. Retry after {retry_after:?} s")]
    RateLimited { retry_after: Option<u64> },
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Non-success code reported inside the response body
    #[error("Provider Error ({code}): {message}")]
    Provider { code: String, message: String },
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

/// `{"code": ..., "msg": ...}` error body shared by OKX and Binance
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    code: serde_json::Value,
    msg: String,
}

/// Map a non-success HTTP response onto an [`ApiError`]
pub fn classify_error_response(status: StatusCode, retry_after: Option<u64>, body: &str) -> ApiError {
    let status_code = status.as_u16();

    if status_code == 429 || status_code == 418 {
        warn!("Rate limited ({}), retry after {:?} s", status_code, retry_after);
        return ApiError::RateLimited { retry_after };
    }

    // Exchanges report most application failures as a 4xx with a code/msg body
    if let Ok(err) = serde_json::from_str::<ProviderErrorBody>(body) {
        let code = match err.code {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        return ApiError::Provider { code, message: err.msg };
    }

    let body = summarize_body(body);
    match status_code {
        400 => ApiError::BadRequest(body),
        401 | 403 => ApiError::Unauthorized(body),
        404 => ApiError::NotFound(body),
        500..=599 => {
            warn!("Server error {}: {}", status_code, body);
            ApiError::ServerError(status_code, body)
        }
        _ => ApiError::HttpError(status_code, body),
    }
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
}

/// Send a request and decode a JSON body, classifying every failure
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let retry_after = retry_after_secs(&response);
        let body = response.text().await.unwrap_or_default();
        return Err(classify_error_response(status, retry_after, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
}
