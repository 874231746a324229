use std::cmp::Ordering;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// CellValue – a lazily typed view of a raw cell
// ---------------------------------------------------------------------------

/// A raw text cell resolved for comparison: numeric when the text parses as a
/// float, text otherwise. Cells are always stored as text; this view is built
/// on demand and never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    /// Resolve a raw cell. Surrounding whitespace is ignored for the numeric
    /// parse only; the text variant keeps the raw value.
    pub fn parse(raw: &'a str) -> Self {
        match parse_number(raw) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Text(raw),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

/// Numeric parse used everywhere a cell is interpreted as a number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Three-way comparison of two raw cells.
///
/// Both sides numeric → numeric comparison; otherwise plain text comparison.
/// Anything that is neither equal nor greater is `Less`, so a NaN operand
/// compares as `Less`.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (CellValue::parse(a), CellValue::parse(b)) {
        (CellValue::Number(x), CellValue::Number(y)) => three_way(x == y, x > y),
        _ => three_way(a == b, a > b),
    }
}

fn three_way(equal: bool, greater: bool) -> Ordering {
    if equal {
        Ordering::Equal
    } else if greater {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the source file
// ---------------------------------------------------------------------------

/// A single record: column name → raw text value. A column missing from
/// `cells` is an absent value (short CSV record, JSON null, Parquet null).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows of one file in file order, plus the column names in header order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
    pub column_names: Vec<String>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { rows, column_names }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
