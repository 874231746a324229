use super::clause::OrderClause;
use super::error::{QueryError, QueryResult};
use crate::data::model::Row;

/// Stable sort on the raw text of `clause.column`.
///
/// Ordering is plain text ordering, not [`compare_values`](crate::data::model::compare_values):
/// `"1199"` sorts before `"199"`. Equal keys keep their input order in both
/// directions. Every row must carry the column.
pub fn sort_rows<'a>(mut rows: Vec<&'a Row>, clause: &OrderClause) -> QueryResult<Vec<&'a Row>> {
    if rows.iter().any(|row| !row.contains(&clause.column)) {
        return Err(QueryError::MissingColumn(clause.column.clone()));
    }

    let column = clause.column.as_str();
    if clause.is_descending() {
        rows.sort_by(|a, b| sort_key(b, column).cmp(sort_key(a, column)));
    } else {
        rows.sort_by(|a, b| sort_key(a, column).cmp(sort_key(b, column)));
    }
    Ok(rows)
}

fn sort_key<'r>(row: &'r Row, column: &str) -> &'r str {
    row.get(column).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::filter_rows;
    use crate::query::test_support::phones;

    fn sorted<'a>(rows: &'a [Row], expr: &str) -> QueryResult<Vec<&'a str>> {
        let clause: OrderClause = expr.parse().unwrap();
        let out = sort_rows(filter_rows(rows, None), &clause)?;
        Ok(out.iter().map(|r| r.get("name").unwrap()).collect())
    }

    #[test]
    fn ascending_is_text_order() {
        let rows = phones();
        assert_eq!(
            sorted(&rows, "price=asc").unwrap(),
            ["galaxy s23 ultra", "redmi note 12", "poco x5 pro", "iphone 15 pro"]
        );
    }

    #[test]
    fn desc_reverses() {
        let rows = phones();
        assert_eq!(
            sorted(&rows, "rating=desc").unwrap(),
            ["iphone 15 pro", "galaxy s23 ultra", "redmi note 12", "poco x5 pro"]
        );
    }

    #[test]
    fn any_other_direction_is_ascending() {
        let rows = phones();
        let asc = sorted(&rows, "name=asc").unwrap();
        assert_eq!(sorted(&rows, "name=dsc").unwrap(), asc);
        assert_eq!(sorted(&rows, "name=").unwrap(), asc);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = phones();
        let clause: OrderClause = "brand=asc".parse().unwrap();
        let out = sort_rows(filter_rows(&rows, None), &clause).unwrap();
        let names: Vec<_> = out.iter().map(|r| r.get("name").unwrap()).collect();
        assert_eq!(names, ["iphone 15 pro", "galaxy s23 ultra", "redmi note 12", "poco x5 pro"]);

        let clause: OrderClause = "brand=desc".parse().unwrap();
        let out = sort_rows(filter_rows(&rows, None), &clause).unwrap();
        let names: Vec<_> = out.iter().map(|r| r.get("name").unwrap()).collect();
        assert_eq!(names, ["redmi note 12", "poco x5 pro", "galaxy s23 ultra", "iphone 15 pro"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let rows = phones();
        assert_eq!(
            sorted(&rows, "color=asc"),
            Err(QueryError::MissingColumn("color".into()))
        );
    }
}
