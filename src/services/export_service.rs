//! JSON sink for fetched series

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::models::{PricePoint, SentimentPoint};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `{dir}/{symbol}_prices_{days}d.json`, symbol lower-cased
pub fn price_file_path(dir: &Path, symbol: &str, days: u32) -> PathBuf {
    dir.join(format!("{}_prices_{}d.json", symbol.to_lowercase(), days))
}

/// `{dir}/fear_greed_{days}d.json`
pub fn sentiment_file_path(dir: &Path, days: u32) -> PathBuf {
    dir.join(format!("fear_greed_{}d.json", days))
}

/// Write `items` as a pretty-printed JSON array, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, items: &[T]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, items).map_err(|source| ExportError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

pub fn write_prices(
    dir: &Path,
    symbol: &str,
    days: u32,
    points: &[PricePoint],
) -> Result<PathBuf, ExportError> {
    let path = price_file_path(dir, symbol, days);
    write_json(&path, points)?;
    Ok(path)
}

pub fn write_sentiment(dir: &Path, days: u32, points: &[SentimentPoint]) -> Result<PathBuf, ExportError> {
    let path = sentiment_file_path(dir, days);
    write_json(&path, points)?;
    Ok(path)
}
