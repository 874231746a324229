use super::aggregate::{aggregate_rows, AggregateResult};
use super::clause::{AggregateClause, FilterClause, OrderClause};
use super::error::{QueryError, QueryResult};
use super::filter::filter_rows;
use super::sort::sort_rows;
use crate::data::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// QueryEngine – the three entry points over one loaded dataset
// ---------------------------------------------------------------------------

/// Owns the dataset for one invocation. Every operation parses its clause
/// strings fresh and either fully succeeds or returns an error.
///
/// Empty clause strings are treated the same as missing ones.
pub struct QueryEngine {
    dataset: Dataset,
}

impl QueryEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn column_names(&self) -> &[String] {
        &self.dataset.column_names
    }

    /// Rows matching the `where` expression, in file order.
    pub fn filter_rows(&self, where_expr: Option<&str>) -> QueryResult<Vec<&Row>> {
        let clause = non_empty(where_expr)
            .map(str::parse::<FilterClause>)
            .transpose()?;
        let rows = filter_rows(&self.dataset.rows, clause.as_ref());
        log::debug!(
            "filter {:?}: {} of {} rows",
            where_expr,
            rows.len(),
            self.dataset.len()
        );
        Ok(rows)
    }

    /// avg/min/max of a column over the rows matching `where_expr`.
    pub fn aggregate(
        &self,
        where_expr: Option<&str>,
        aggregate_expr: Option<&str>,
    ) -> QueryResult<AggregateResult> {
        let expr = non_empty(aggregate_expr).ok_or(QueryError::MissingParameter("Aggregate"))?;
        let clause: AggregateClause = expr.parse()?;
        let rows = self.filter_rows(where_expr)?;
        let result = aggregate_rows(&rows, &clause)?;
        log::debug!("aggregate {expr:?} over {} rows: {}", rows.len(), result.value);
        Ok(result)
    }

    /// Rows matching `where_expr`, sorted by the order-by column.
    pub fn order_by(
        &self,
        where_expr: Option<&str>,
        order_expr: Option<&str>,
    ) -> QueryResult<Vec<&Row>> {
        let expr = non_empty(order_expr).ok_or(QueryError::MissingParameter("Order by"))?;
        let clause: OrderClause = expr.parse()?;
        let rows = self.filter_rows(where_expr)?;
        log::debug!(
            "order by {:?} ({}) over {} rows",
            clause.column,
            if clause.is_descending() { "desc" } else { "asc" },
            rows.len()
        );
        sort_rows(rows, &clause)
    }
}

fn non_empty(expr: Option<&str>) -> Option<&str> {
    expr.filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::aggregate::AggregateValue;
    use crate::query::test_support::phone_dataset;

    fn engine() -> QueryEngine {
        QueryEngine::new(phone_dataset())
    }

    #[test]
    fn filter_without_clause_returns_everything() {
        let engine = engine();
        assert_eq!(engine.filter_rows(None).unwrap().len(), 4);
        assert_eq!(engine.filter_rows(Some("")).unwrap().len(), 4);
    }

    #[test]
    fn filter_rejects_bad_expression() {
        let engine = engine();
        assert!(matches!(
            engine.filter_rows(Some("price!1000")),
            Err(QueryError::InvalidExpression { .. })
        ));
    }

    #[test]
    fn aggregate_end_to_end() {
        let engine = engine();
        let avg = engine.aggregate(None, Some("price=avg")).unwrap();
        assert_eq!(avg.value, AggregateValue::Number(674.0));

        let min = engine.aggregate(Some("brand=xiaomi"), Some("price=min")).unwrap();
        assert_eq!(min.as_f64(), Some(199.0));

        let max = engine.aggregate(None, Some("rating=max")).unwrap();
        assert_eq!(max.as_f64(), Some(4.9));
    }

    #[test]
    fn aggregate_requires_its_parameter() {
        let engine = engine();
        assert_eq!(
            engine.aggregate(None, None),
            Err(QueryError::MissingParameter("Aggregate"))
        );
        assert_eq!(
            engine.aggregate(Some("brand=apple"), Some("")),
            Err(QueryError::MissingParameter("Aggregate"))
        );
    }

    #[test]
    fn aggregate_parse_errors_come_before_filtering() {
        let engine = engine();
        assert!(matches!(
            engine.aggregate(Some("nonsense"), Some("=avg")),
            Err(QueryError::InvalidExpression { clause: "aggregate", .. })
        ));
    }

    #[test]
    fn aggregate_with_no_matches_is_the_sentinel() {
        let engine = engine();
        let result = engine.aggregate(Some("brand=nokia"), Some("price=median")).unwrap();
        assert_eq!(result.function, "median");
        assert_eq!(result.value, AggregateValue::NoNumericValues);
    }

    #[test]
    fn order_by_filters_then_sorts() {
        let engine = engine();
        let rows = engine.order_by(Some("brand=xiaomi"), Some("price=desc")).unwrap();
        let prices: Vec<_> = rows.iter().map(|r| r.get("price").unwrap()).collect();
        assert_eq!(prices, ["299", "199"]);
    }

    #[test]
    fn order_by_requires_its_parameter() {
        let engine = engine();
        assert_eq!(
            engine.order_by(Some("invalid_column"), None).unwrap_err(),
            QueryError::MissingParameter("Order by")
        );
        assert!(engine.order_by(None, Some("price!desc")).is_err());
        assert!(engine.order_by(None, Some("=asc")).is_err());
    }
}
