//! Raw record source: loads sale records from CSV/JSON files or the
//! embedded sample dataset.

use contracts::dashboards::d400_sales_overview::RawSaleRecord;
use std::path::Path;
use thiserror::Error;

/// Sample dataset compiled into the binary
const SAMPLE_SALES_CSV: &str = include_str!("../../../data/sample_sales.csv");

/// Ошибки загрузки данных продаж
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported data file format: {0}")]
    UnsupportedFormat(String),
}

/// Load records from a `.csv` or `.json` file
pub fn load_records(path: &Path) -> Result<Vec<RawSaleRecord>, DataSourceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let text = std::fs::read_to_string(path).map_err(|source| DataSourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records = match extension.as_str() {
        "csv" => parse_csv(&text)?,
        "json" => parse_json(&text)?,
        _ => {
            return Err(DataSourceError::UnsupportedFormat(
                path.display().to_string(),
            ))
        }
    };

    tracing::info!(
        "Loaded {} sale records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

/// Parse CSV text with a header row into records
pub fn parse_csv(csv_text: &str) -> Result<Vec<RawSaleRecord>, DataSourceError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize::<RawSaleRecord>() {
        records.push(result?);
    }

    Ok(records)
}

/// Parse a JSON array of records
pub fn parse_json(json_text: &str) -> Result<Vec<RawSaleRecord>, DataSourceError> {
    let records: Vec<RawSaleRecord> = serde_json::from_str(json_text)?;
    Ok(records)
}

/// Records of the embedded sample dataset
pub fn sample_records() -> Result<Vec<RawSaleRecord>, DataSourceError> {
    let records = parse_csv(SAMPLE_SALES_CSV)?;
    tracing::info!("Using embedded sample dataset ({} records)", records.len());
    Ok(records)
}
