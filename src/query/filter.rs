use std::cmp::Ordering;

use super::clause::{FilterClause, Operator};
use crate::data::model::{compare_values, Row};

// ---------------------------------------------------------------------------
// Row filter: one clause → matching rows, original order
// ---------------------------------------------------------------------------

/// Return the rows that pass `clause`, in input order. `None` passes every row.
///
/// A row passes when:
/// * it has a value for the clause column (absent values never match), and
/// * `=`: the raw value equals the literal exactly (no numeric coercion), or
/// * `>` / `<`: [`compare_values`] orders the value after / before the literal.
pub fn filter_rows<'a>(rows: &'a [Row], clause: Option<&FilterClause>) -> Vec<&'a Row> {
    let Some(clause) = clause else {
        return rows.iter().collect();
    };
    rows.iter().filter(|row| matches(row, clause)).collect()
}

pub fn matches(row: &Row, clause: &FilterClause) -> bool {
    let Some(value) = row.get(&clause.column) else {
        return false;
    };
    match clause.operator {
        Operator::Eq => value == clause.literal,
        Operator::Gt => compare_values(value, &clause.literal) == Ordering::Greater,
        Operator::Lt => compare_values(value, &clause.literal) == Ordering::Less,
    }
}
