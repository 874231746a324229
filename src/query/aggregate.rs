use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::clause::{AggregateClause, AggregateFunction};
use super::error::{QueryError, QueryResult};
use crate::data::model::{CellValue, Row};

/// Text shown in place of a value when the column had nothing numeric.
pub const NO_NUMERIC_VALUES: &str = "No numeric values found";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateValue {
    Number(f64),
    NoNumericValues,
}

impl fmt::Display for AggregateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the decimal point on whole numbers: 674.0, not 674
            AggregateValue::Number(n) => write!(f, "{n:?}"),
            AggregateValue::NoNumericValues => f.write_str(NO_NUMERIC_VALUES),
        }
    }
}

/// A single `function → value` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub function: String,
    pub value: AggregateValue,
}

#[cfg(test)]
impl AggregateResult {
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            AggregateValue::Number(n) => Some(n),
            AggregateValue::NoNumericValues => None,
        }
    }
}

impl Serialize for AggregateResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self.value {
            AggregateValue::Number(n) => map.serialize_entry(&self.function, &n)?,
            AggregateValue::NoNumericValues => {
                map.serialize_entry(&self.function, NO_NUMERIC_VALUES)?
            }
        }
        map.end()
    }
}

/// Aggregate the numeric values of `clause.column` over `rows`.
///
/// Absent and non-numeric cells are skipped. With nothing left the result is
/// [`AggregateValue::NoNumericValues`], whatever the function name; the name
/// is validated only when there is something to aggregate.
pub fn aggregate_rows(rows: &[&Row], clause: &AggregateClause) -> QueryResult<AggregateResult> {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.get(&clause.column))
        .filter_map(|raw| CellValue::parse(raw).as_f64())
        .collect();

    let value = if values.is_empty() {
        AggregateValue::NoNumericValues
    } else {
        let function = AggregateFunction::from_name(&clause.function)
            .ok_or_else(|| QueryError::UnsupportedOperation(clause.function.clone()))?;
        AggregateValue::Number(compute(function, &values))
    };

    Ok(AggregateResult {
        function: clause.function.clone(),
        value,
    })
}

/// `values` must be non-empty.
fn compute(function: AggregateFunction, values: &[f64]) -> f64 {
    match function {
        AggregateFunction::Avg => values.iter().sum::<f64>() / values.len() as f64,
        AggregateFunction::Min => extremum(values, |candidate, best| candidate < best),
        AggregateFunction::Max => extremum(values, |candidate, best| candidate > best),
    }
}

/// First value wins ties; a later value replaces the current best only when
/// `better` says so.
fn extremum(values: &[f64], better: impl Fn(f64, f64) -> bool) -> f64 {
    values[1..]
        .iter()
        .fold(values[0], |best, &v| if better(v, best) { v } else { best })
}
