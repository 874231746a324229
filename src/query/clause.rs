use std::str::FromStr;

use super::error::{QueryError, QueryResult};

// ---------------------------------------------------------------------------
// Filter clause: `column<op>literal`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Lt,
}

impl Operator {
    /// Operators in the order they are tried when parsing.
    pub const PRIORITY: [Operator; 3] = [Operator::Eq, Operator::Gt, Operator::Lt];

    pub fn symbol(self) -> char {
        match self {
            Operator::Eq => '=',
            Operator::Gt => '>',
            Operator::Lt => '<',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub column: String,
    pub operator: Operator,
    pub literal: String,
}

impl FromStr for FilterClause {
    type Err = QueryError;

    /// The first operator (in [`Operator::PRIORITY`] order) that splits the
    /// expression into exactly two parts decides the clause. Operators that
    /// occur more than once are skipped.
    fn from_str(expr: &str) -> QueryResult<Self> {
        let reject = || invalid("where", expr, "'column=value', 'column>value' or 'column<value'");

        for operator in Operator::PRIORITY {
            let parts: Vec<&str> = expr.split(operator.symbol()).collect();
            let [column, literal] = parts.as_slice() else {
                continue;
            };
            let (column, literal) = (column.trim(), literal.trim());
            if column.is_empty() || literal.is_empty() {
                return Err(reject());
            }
            return Ok(FilterClause {
                column: column.to_string(),
                operator,
                literal: literal.to_string(),
            });
        }
        Err(reject())
    }
}

// ---------------------------------------------------------------------------
// Aggregate clause: `column=function`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "avg" => Some(AggregateFunction::Avg),
            "min" => Some(AggregateFunction::Min),
            "max" => Some(AggregateFunction::Max),
            _ => None,
        }
    }
}

/// The function name stays unresolved text here; it is checked against
/// [`AggregateFunction`] only once there are values to aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateClause {
    pub column: String,
    pub function: String,
}

impl FromStr for AggregateClause {
    type Err = QueryError;

    fn from_str(expr: &str) -> QueryResult<Self> {
        let (column, function) = split_first_eq(expr)
            .ok_or_else(|| invalid("aggregate", expr, "'column=avg|min|max'"))?;
        if column.is_empty() || function.is_empty() {
            return Err(invalid("aggregate", expr, "'column=avg|min|max'"));
        }
        Ok(AggregateClause {
            column: column.to_string(),
            function: function.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Order-by clause: `column=direction`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    pub column: String,
    pub direction: String,
}

impl OrderClause {
    /// Only the exact text `desc` sorts descending.
    pub fn is_descending(&self) -> bool {
        self.direction == "desc"
    }
}

impl FromStr for OrderClause {
    type Err = QueryError;

    fn from_str(expr: &str) -> QueryResult<Self> {
        let (column, direction) = split_first_eq(expr)
            .ok_or_else(|| invalid("order by", expr, "'column=asc|desc'"))?;
        if column.is_empty() {
            return Err(invalid("order by", expr, "'column=asc|desc'"));
        }
        Ok(OrderClause {
            column: column.to_string(),
            direction: direction.to_string(),
        })
    }
}

/// Split on the first `=`, trimming both sides.
fn split_first_eq(expr: &str) -> Option<(&str, &str)> {
    expr.split_once('=').map(|(l, r)| (l.trim(), r.trim()))
}

fn invalid(clause: &'static str, expr: &str, usage: &'static str) -> QueryError {
    QueryError::InvalidExpression {
        clause,
        expr: expr.to_string(),
        usage,
    }
}
