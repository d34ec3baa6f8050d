use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::Candle;

/// Envelope of `GET /api/v5/market/candles`
///
/// `data` rows are `[ts, o, h, l, c, vol, volCcy, volCcyQuote, confirm]`, all strings,
/// newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkxCandlesResponse {
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Vec<Vec<String>>,
}

impl OkxCandlesResponse {
    pub fn is_success(&self) -> bool {
        self.code == "0"
    }

    /// Parse every row, or surface the body-level error code
    pub fn into_candles(self) -> Result<Vec<Candle>, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Provider {
                code: self.code,
                message: self.msg,
            });
        }

        self.data.iter().map(|row| parse_okx_row(row)).collect()
    }
}

fn field<'a>(row: &'a [String], index: usize, name: &str) -> Result<&'a str, ApiError> {
    row.get(index).map(String::as_str).ok_or_else(|| {
        ApiError::DeserializationError(format!(
            "OKX candle row has {} fields, missing {}",
            row.len(),
            name
        ))
    })
}

fn number<T: std::str::FromStr>(row: &[String], index: usize, name: &str) -> Result<T, ApiError> {
    let raw = field(row, index, name)?;
    raw.parse().map_err(|_| {
        ApiError::DeserializationError(format!("OKX candle {} is not numeric: {:?}", name, raw))
    })
}

fn lenient(row: &[String], index: usize) -> Option<f64> {
    row.get(index)?.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Parse one OKX candle row into a [`Candle`]
///
/// Only `ts` and the close price must be valid; the other OHLV cells are best effort.
pub fn parse_okx_row(row: &[String]) -> Result<Candle, ApiError> {
    let close: f64 = number(row, 4, "close")?;
    if !close.is_finite() {
        return Err(ApiError::DeserializationError(format!(
            "OKX candle close is not finite: {}",
            close
        )));
    }

    Ok(Candle {
        open_time_ms: number(row, 0, "ts")?,
        close,
        open: lenient(row, 1),
        high: lenient(row, 2),
        low: lenient(row, 3),
        volume: lenient(row, 5),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_full_row() {
        let candle = parse_okx_row(&row(&[
            "1704067200000", "42000.1", "42500", "41800", "42250.7", "1200.5", "5.0e7", "5.0e7", "1",
        ]))
        .unwrap();

        assert_eq!(candle.open_time_ms, 1_704_067_200_000);
        assert_eq!(candle.close, 42_250.7);
        assert_eq!(candle.volume, Some(1_200.5));
    }

    #[test]
    fn test_rejects_short_or_garbled_rows() {
        assert!(parse_okx_row(&row(&["1704067200000", "1", "2", "3"])).is_err());
        assert!(parse_okx_row(&row(&["yesterday", "1", "2", "3", "4", "5"])).is_err());
    }

    #[test]
    fn test_only_ts_and_close_are_required() {
        let five_fields = parse_okx_row(&row(&["1704067200000", "1", "2", "3", "42.5"])).unwrap();
        assert_eq!(five_fields.close, 42.5);
        assert_eq!(five_fields.volume, None);

        let blank_volume = parse_okx_row(&row(&["1704067200000", "", "x", "1", "2", ""])).unwrap();
        assert_eq!(blank_volume.close, 2.0);
        assert_eq!(blank_volume.open, None);
        assert_eq!(blank_volume.high, None);
        assert_eq!(blank_volume.low, Some(1.0));
    }

    #[test]
    fn test_page_with_blank_volume_is_kept() {
        let response: OkxCandlesResponse = serde_json::from_str(
            r#"{"code":"0","msg":"","data":[
                ["1704153600000","1","1","1","2",""],
                ["1704067200000","1","1","1","3","1"]
            ]}"#,
        )
        .unwrap();

        let candles = response.into_candles().unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].close, 2.0);
    }

    #[test]
    fn test_non_finite_close_is_rejected() {
        assert!(parse_okx_row(&row(&["1704067200000", "1", "1", "1", "NaN", "1"])).is_err());
        assert!(parse_okx_row(&row(&["1704067200000", "1", "1", "1", "inf", "1"])).is_err());
    }

    #[test]
    fn test_body_error_code_becomes_provider_error() {
        let response: OkxCandlesResponse = serde_json::from_str(
            r#"{"code":"51001","msg":"Instrument ID does not exist","data":[]}"#,
        )
        .unwrap();

        match response.into_candles() {
            Err(ApiError::Provider { code, message }) => {
                assert_eq!(code, "51001");
                assert_eq!(message, "Instrument ID does not exist");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_success_envelope_keeps_provider_order() {
        let response: OkxCandlesResponse = serde_json::from_str(
            r#"{"code":"0","msg":"","data":[
                ["1704153600000","1","1","1","2","1","1","1","1"],
                ["1704067200000","1","1","1","3","1","1","1","1"]
            ]}"#,
        )
        .unwrap();

        let candles = response.into_candles().unwrap();
        assert_eq!(candles.len(), 2);
        assert!(candles[0].open_time_ms > candles[1].open_time_ms);
        assert_eq!(candles[1].close, 3.0);
    }
}
