use anyhow::Result;

use crate::cli::Args;
use crate::data::loader::load_file;
use crate::query::QueryEngine;
use crate::ui::{render_aggregate, render_rows};

// ---------------------------------------------------------------------------
// One invocation: load, run a single operation, render
// ---------------------------------------------------------------------------

/// The operation an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    OrderBy(&'a str),
    Aggregate(&'a str),
    Filter,
}

impl<'a> Operation<'a> {
    /// `--orderby` beats `--aggregate` beats a plain filter. Empty values
    /// count as not given.
    pub fn select(args: &'a Args) -> Self {
        let given = |opt: &'a Option<String>| opt.as_deref().filter(|s| !s.is_empty());
        if let Some(expr) = given(&args.orderby) {
            Operation::OrderBy(expr)
        } else if let Some(expr) = given(&args.aggregate) {
            Operation::Aggregate(expr)
        } else {
            Operation::Filter
        }
    }
}

/// Run the invocation described by `args` and return the rendered output.
pub fn run(args: &Args) -> Result<String> {
    let engine = QueryEngine::new(load_file(&args.file)?);
    let where_expr = args.where_expr.as_deref();
    let columns = engine.column_names();

    let output = match Operation::select(args) {
        Operation::OrderBy(expr) => {
            let rows = engine.order_by(where_expr, Some(expr))?;
            render_rows(columns, &rows, args.format)?
        }
        Operation::Aggregate(expr) => {
            let result = engine.aggregate(where_expr, Some(expr))?;
            render_aggregate(&result, args.format)?
        }
        Operation::Filter => {
            let rows = engine.filter_rows(where_expr)?;
            render_rows(columns, &rows, args.format)?
        }
    };
    Ok(output)
}
