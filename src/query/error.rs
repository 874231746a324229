use thiserror::Error;

/// Errors raised by clause parsing and the query operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid {clause} expression '{expr}': expected {usage}")]
    InvalidExpression {
        clause: &'static str,
        expr: String,
        usage: &'static str,
    },

    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("Unsupported aggregate operation: {0}")]
    UnsupportedOperation(String),

    #[error("Column '{0}' is missing from one or more rows")]
    MissingColumn(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
