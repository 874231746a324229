use std::path::PathBuf;

use clap::Parser;

use crate::ui::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rowquery")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Filter, aggregate or sort the rows of a CSV, JSON or Parquet file")]
#[command(long_about = "Filter, aggregate or sort the rows of a CSV, JSON or Parquet file.\n\
When several operations are given, --orderby wins over --aggregate, which wins over a plain --where.")]
pub struct Args {
    /// Path to the data file (.csv, .json, .parquet; anything else is read as CSV)
    #[arg(long)]
    pub file: PathBuf,

    /// Filter condition: column=value, column>value or column<value
    #[arg(long = "where", value_name = "EXPR")]
    pub where_expr: Option<String>,

    /// Aggregation: column=avg|min|max
    #[arg(long, value_name = "EXPR")]
    pub aggregate: Option<String>,

    /// Sort order: column=asc|desc
    #[arg(long, value_name = "EXPR")]
    pub orderby: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
