use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use clap::ValueEnum;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::data::model::Row;
use crate::query::aggregate::AggregateResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grid table
    #[default]
    Table,
    Csv,
    Json,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Render result rows with `columns` as the header, in that order.
/// Absent cells render empty (omitted in JSON).
pub fn render_rows(columns: &[String], rows: &[&Row], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => grid(columns, rows),
        OutputFormat::Csv => csv_text(columns, rows),
        OutputFormat::Json => {
            let records: Vec<RowView<'_>> = rows.iter().map(|row| RowView { columns, row }).collect();
            serde_json::to_string_pretty(&records).context("encoding rows as JSON")
        }
    }
}

/// Render an aggregate as a single `function → value` entry.
pub fn render_aggregate(result: &AggregateResult, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(result).context("encoding aggregate as JSON");
    }
    let columns = [result.function.clone()];
    let row: Row = [(result.function.as_str(), result.value.to_string())]
        .into_iter()
        .collect();
    render_rows(&columns, &[&row], format)
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

fn grid(columns: &[String], rows: &[&Row]) -> Result<String> {
    if columns.is_empty() {
        return Ok(String::new());
    }

    let schema = Schema::new(
        columns
            .iter()
            .map(|c| Field::new(c, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|c| {
            let cells: Vec<Option<&str>> = rows.iter().map(|row| row.get(c)).collect();
            Arc::new(StringArray::from(cells)) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(schema), arrays).context("building result table")?;
    let table = pretty_format_batches(&[batch]).context("formatting result table")?;
    Ok(table.to_string())
}

fn csv_text(columns: &[String], rows: &[&Row]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| row.get(c).unwrap_or("")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV output")?;
    Ok(String::from_utf8(bytes)?)
}

/// A row serialized as a JSON object with keys in column order.
struct RowView<'a> {
    columns: &'a [String],
    row: &'a Row,
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for column in self.columns {
            if let Some(value) = self.row.get(column) {
                map.serialize_entry(column, value)?;
            }
        }
        map.end()
    }
}
