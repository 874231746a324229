use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::Array;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular file into a [`Dataset`].  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row followed by records (also used for any other extension)
/// * `.json`    – `[{ "column": value, ... }, ...]`
/// * `.parquet` – any flat schema; every cell is rendered to text
///
/// Values are kept as raw text; no type coercion happens at load time.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => {
            log::debug!("no known extension (.{other}), reading {} as CSV", path.display());
            load_csv(path)
        }
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.column_names.len(),
        path.display()
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("opening {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per row.
/// Records shorter than the header leave the trailing columns absent;
/// extra fields have no column name and are dropped.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(open(path)?);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        if record.len() != headers.len() {
            log::warn!(
                "CSV row {row_no}: {} fields for {} columns",
                record.len(),
                headers.len()
            );
        }

        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.as_str(), value))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "name": "iphone 15 pro", "brand": "apple", "price": 999 },
///   ...
/// ]
/// ```
///
/// Columns are ordered by first appearance. `null` values are absent.
fn load_json(path: &Path) -> Result<Dataset> {
    let root: JsonValue =
        serde_json::from_reader(std::io::BufReader::new(open(path)?)).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if !column_names.contains(key) {
                column_names.push(key.clone());
            }
            if let Some(text) = json_to_text(val) {
                row.insert(key.clone(), text);
            }
        }
        rows.push(row);
    }

    Ok(Dataset::new(column_names, rows))
}

fn json_to_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file. Every column becomes a text column using Arrow's
/// display formatting; null cells are absent.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)
        .context("reading parquet metadata")?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let options = FormatOptions::default();
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let formatters = batch
            .columns()
            .iter()
            .map(|col| ArrayFormatter::try_new(col.as_ref(), &options))
            .collect::<Result<Vec<_>, _>>()
            .context("formatting parquet columns")?;

        for row_idx in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, name) in column_names.iter().enumerate() {
                let col: &Arc<dyn Array> = batch.column(col_idx);
                if col.is_null(row_idx) {
                    continue;
                }
                row.insert(name.clone(), formatters[col_idx].value(row_idx).to_string());
            }
            rows.push(row);
        }
    }

    Ok(Dataset::new(column_names, rows))
}
