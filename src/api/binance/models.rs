use serde_json::Value;

use crate::api::ApiError;
use crate::models::Candle;

/// Raw kline row from `GET /api/v3/klines`
///
/// `[openTime, "open", "high", "low", "close", "volume", closeTime, ...]`: times are
/// numbers, prices are strings.
pub type KlineRow = Vec<Value>;

fn field<'a>(row: &'a [Value], index: usize, name: &str) -> Result<&'a Value, ApiError> {
    row.get(index).ok_or_else(|| {
        ApiError::DeserializationError(format!(
            "Binance kline row has {} fields, missing {}",
            row.len(),
            name
        ))
    })
}

fn as_decimal(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v: &f64| v.is_finite())
}

fn decimal(row: &[Value], index: usize, name: &str) -> Result<f64, ApiError> {
    let value = field(row, index, name)?;
    as_decimal(value).ok_or_else(|| {
        ApiError::DeserializationError(format!("Binance kline {} is not a finite number: {}", name, value))
    })
}

fn lenient(row: &[Value], index: usize) -> Option<f64> {
    row.get(index).and_then(as_decimal)
}

/// Parse one Binance kline row into a [`Candle`]
///
/// Only the open time and the close price must be valid; the other OHLV cells are best
/// effort.
pub fn parse_binance_row(row: &[Value]) -> Result<Candle, ApiError> {
    let open_time = field(row, 0, "open time")?;
    let open_time_ms = open_time.as_i64().ok_or_else(|| {
        ApiError::DeserializationError(format!("Binance kline open time is not an integer: {}", open_time))
    })?;

    Ok(Candle {
        open_time_ms,
        close: decimal(row, 4, "close")?,
        open: lenient(row, 1),
        high: lenient(row, 2),
        low: lenient(row, 3),
        volume: lenient(row, 5),
    })
}
